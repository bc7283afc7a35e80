use crate::api;
use crate::utils::*;
use peligro_core as model;
use yew::prelude::*;

/// The hidden-cell glyph.
const PLACEHOLDER: &str = "?";

/// Controller state behind the view: the current board plus the explicit
/// loading flag guarding re-entrant restarts.
#[derive(Clone, Debug, PartialEq, Default)]
pub(crate) struct Session {
    board: Option<model::Board>,
    loading: bool,
    error: Option<String>,
}

impl Session {
    pub(crate) fn board(&self) -> Option<&model::Board> {
        self.board.as_ref()
    }

    pub(crate) fn is_loading(&self) -> bool {
        self.loading
    }

    pub(crate) fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Enters the loading view. Returns false when a fetch is already in
    /// flight, in which case the restart request is dropped.
    pub(crate) fn begin_restart(&mut self) -> bool {
        if self.loading {
            log::debug!("restart ignored, a fetch is already in flight");
            return false;
        }
        self.loading = true;
        self.error = None;
        true
    }

    /// Leaves the loading view. A fresh board replaces the old one wholesale;
    /// a failure keeps whatever board was on screen and records the message.
    pub(crate) fn finish_load(&mut self, result: Result<model::Board, String>) {
        match result {
            Ok(board) => self.board = Some(board),
            Err(message) => self.error = Some(message),
        }
        self.loading = false;
    }

    /// Advances the addressed clue. Clicks while loading, before the first
    /// load, or at an unresolvable address are no-ops.
    pub(crate) fn click(&mut self, addr: model::CellAddr) -> bool {
        if self.loading {
            return false;
        }
        let Some(board) = self.board.as_mut() else {
            return false;
        };
        match board.reveal(addr) {
            Ok(outcome) => outcome.has_update(),
            Err(err) => {
                log::warn!("click at unresolvable cell {:?}: {}", addr, err);
                false
            }
        }
    }
}

pub(crate) enum Msg {
    CellClicked(model::CellAddr),
    Restart,
    BoardReady(Result<model::Board, api::ApiError>),
}

#[derive(Properties, Clone, PartialEq)]
struct CellProps {
    category: model::Slot,
    clue: model::Slot,
    showing: model::Showing,
    text: AttrValue,
    callback: Callback<model::CellAddr>,
}

#[function_component(CellView)]
fn cell_component(props: &CellProps) -> Html {
    use model::Showing::*;

    let CellProps {
        category,
        clue,
        showing,
        text,
        callback,
    } = props.clone();

    let class = match showing {
        Hidden => classes!("cell"),
        Question => classes!("cell", "question"),
        Answer => classes!("cell", "answer", "locked"),
    };

    let onclick = Callback::from(move |_: MouseEvent| {
        log::trace!("({}, {}) clicked", category, clue);
        callback.emit((category, clue));
    });

    html! {
        <td {class} {onclick}>{text}</td>
    }
}

#[derive(Properties, Debug, Clone, PartialEq)]
pub(crate) struct GameProps {
    /// Forced sampling seed from the location-hash args, if any.
    #[prop_or_default]
    pub(crate) seed: Option<u64>,
}

#[derive(Debug)]
pub(crate) struct GameView {
    session: Session,
    config: model::BoardConfig,
    forced_seed: Option<u64>,
}

impl GameView {
    fn next_seed(&self) -> u64 {
        self.forced_seed.unwrap_or_else(js_random_seed)
    }

    fn cell_text(clue: &model::Clue) -> AttrValue {
        clue.visible_text()
            .map_or(AttrValue::Static(PLACEHOLDER), |text| {
                AttrValue::from(text.to_string())
            })
    }

    fn view_grid(&self, ctx: &Context<Self>, board: &model::Board) -> Html {
        let config = board.config();
        let callback = ctx.link().callback(Msg::CellClicked);

        html! {
            <table class="board">
                <thead>
                    <tr>
                        {
                            for board.categories().iter().map(|category| html! {
                                <th>{category.title()}</th>
                            })
                        }
                    </tr>
                </thead>
                <tbody>
                    {
                        for (0..config.clues_per_category).map(|clue| html! {
                            <tr>
                                {
                                    for (0..config.categories).map(|category| {
                                        let cell = board
                                            .clue_at((category, clue))
                                            .expect("renderer only emits valid addresses");
                                        html! {
                                            <CellView
                                                {category}
                                                {clue}
                                                showing={cell.showing()}
                                                text={Self::cell_text(cell)}
                                                callback={callback.clone()}
                                            />
                                        }
                                    })
                                }
                            </tr>
                        })
                    }
                </tbody>
            </table>
        }
    }
}

impl Component for GameView {
    type Message = Msg;
    type Properties = GameProps;

    fn create(ctx: &Context<Self>) -> Self {
        Self {
            session: Session::default(),
            config: model::BoardConfig::DEFAULT,
            forced_seed: ctx.props().seed,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        use Msg::*;

        match msg {
            CellClicked(addr) => self.session.click(addr),
            Restart => {
                if !self.session.begin_restart() {
                    return false;
                }
                let seed = self.next_seed();
                let config = self.config;
                log::debug!("restart, seed {}", seed);
                ctx.link()
                    .send_future(async move { BoardReady(api::fetch_board(seed, config).await) });
                true
            }
            BoardReady(Ok(board)) => {
                self.session.finish_load(Ok(board));
                true
            }
            BoardReady(Err(err)) => {
                log::error!("fetch failed: {}", err);
                self.session.finish_load(Err(err.to_string()));
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        use Msg::*;

        let loading = self.session.is_loading();
        let cb_restart = ctx.link().callback(|_: MouseEvent| Restart);

        html! {
            <div class="peligro">
                <header>
                    <h1>{"Peligro!"}</h1>
                    <button class="restart" disabled={loading} onclick={cb_restart}>
                        { if loading { "Loading..." } else { "Restart!" } }
                    </button>
                </header>
                if let Some(error) = self.session.error() {
                    <p class="error">{error}</p>
                }
                if loading {
                    <div class="spinner"/>
                }
                if let Some(board) = self.session.board() {
                    { self.view_grid(ctx, board) }
                }
            </div>
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use peligro_core::{Board, BoardConfig, Category, Clue, RevealOutcome, Showing};

    fn board(config: BoardConfig, tag: &str) -> Board {
        let categories = (0..config.categories)
            .map(|c| {
                let clues = (0..config.clues_per_category)
                    .map(|q| Clue::new(format!("{}q{}x{}", tag, c, q), format!("{}a{}x{}", tag, c, q)))
                    .collect();
                Category::new(format!("{}cat{}", tag, c), clues)
            })
            .collect();
        Board::new(config, categories).unwrap()
    }

    fn loaded_session(config: BoardConfig) -> Session {
        let mut session = Session::default();
        assert!(session.begin_restart());
        session.finish_load(Ok(board(config, "")));
        session
    }

    #[test]
    fn restart_while_loading_is_dropped() {
        let mut session = Session::default();

        assert!(session.begin_restart());
        assert!(session.is_loading());
        // second trigger while the first fetch is still pending
        assert!(!session.begin_restart());

        session.finish_load(Ok(board(BoardConfig::new_unchecked(2, 2), "")));
        assert!(!session.is_loading());
        assert!(session.begin_restart());
    }

    #[test]
    fn clicks_before_and_during_load_are_noops() {
        let mut session = Session::default();
        assert!(!session.click((0, 0)));

        session.begin_restart();
        assert!(!session.click((0, 0)));
    }

    #[test]
    fn click_walks_question_then_answer_then_locks() {
        let mut session = loaded_session(BoardConfig::new_unchecked(1, 1));

        assert!(session.click((0, 0)));
        assert_eq!(
            session.board().unwrap().clue_at((0, 0)).unwrap().showing(),
            Showing::Question
        );

        assert!(session.click((0, 0)));
        let clue = session.board().unwrap().clue_at((0, 0)).unwrap();
        assert_eq!(clue.showing(), Showing::Answer);
        let answer = clue.visible_text().unwrap().to_string();

        // terminal: no re-render, no text change
        assert!(!session.click((0, 0)));
        let clue = session.board().unwrap().clue_at((0, 0)).unwrap();
        assert_eq!(clue.visible_text(), Some(answer.as_str()));
    }

    #[test]
    fn click_outside_the_grid_is_a_noop() {
        let mut session = loaded_session(BoardConfig::new_unchecked(2, 2));

        assert!(!session.click((2, 0)));
        assert!(!session.click((0, 5)));
    }

    #[test]
    fn finish_load_replaces_the_board_wholesale() {
        let config = BoardConfig::new_unchecked(2, 2);
        let mut session = Session::default();

        session.begin_restart();
        session.finish_load(Ok(board(config, "old")));
        session.click((0, 0));

        session.begin_restart();
        session.finish_load(Ok(board(config, "new")));

        let replaced = session.board().unwrap();
        assert_eq!(replaced.clue_at((0, 0)).unwrap().showing(), Showing::Hidden);
        assert!(replaced.clue_at((0, 0)).unwrap().question().starts_with("new"));
    }

    #[test]
    fn failed_load_surfaces_the_error_and_reenables_restart() {
        let mut session = Session::default();

        session.begin_restart();
        session.finish_load(Err("trivia api request failed".to_string()));

        assert!(!session.is_loading());
        assert_eq!(session.error(), Some("trivia api request failed"));
        assert!(session.board().is_none());

        // the next restart clears the banner
        assert!(session.begin_restart());
        assert_eq!(session.error(), None);
    }

    #[test]
    fn every_rendered_address_resolves_to_its_own_clue() {
        let config = BoardConfig::DEFAULT;
        let session = loaded_session(config);
        let board = session.board().unwrap();

        let mut seen = 0;
        for clue in 0..config.clues_per_category {
            for category in 0..config.categories {
                let cell = board.clue_at((category, clue)).unwrap();
                assert_eq!(
                    cell,
                    &board.categories()[usize::from(category)].clues()[usize::from(clue)]
                );
                assert_eq!(cell.showing(), Showing::Hidden);
                seen += 1;
            }
        }
        assert_eq!(seen, config.total_cells());
    }

    #[test]
    fn reveal_outcome_drives_rerenders() {
        let mut board = board(BoardConfig::new_unchecked(1, 1), "");

        assert!(board.reveal((0, 0)).unwrap().has_update());
        assert!(board.reveal((0, 0)).unwrap().has_update());
        assert_eq!(board.reveal((0, 0)).unwrap(), RevealOutcome::NoChange);
    }
}

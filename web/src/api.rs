use gloo::net::http::Request;
use peligro_core as model;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use serde::Deserialize;
use thiserror::Error;

const API_BASE: &str = "https://rithm-jeopardy.herokuapp.com/api";

#[derive(Error, Debug)]
pub(crate) enum ApiError {
    #[error("trivia api request failed: {0}")]
    Http(#[from] gloo::net::Error),
    #[error(transparent)]
    Board(#[from] model::BoardError),
}

/// One entry of the category listing; everything but the id is discarded.
#[derive(Copy, Clone, Debug, PartialEq, Deserialize)]
pub(crate) struct CategoryStub {
    pub(crate) id: u32,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub(crate) struct CategoryDetail {
    pub(crate) title: String,
    pub(crate) clues: Vec<ClueDetail>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub(crate) struct ClueDetail {
    pub(crate) question: String,
    pub(crate) answer: String,
}

async fn get_category_pool() -> Result<Vec<CategoryStub>, ApiError> {
    let pool = Request::get(&format!("{API_BASE}/categories"))
        .query([("count", model::BoardConfig::CATEGORY_POOL_SIZE.to_string())])
        .send()
        .await?
        .json()
        .await?;
    Ok(pool)
}

async fn get_category_detail(id: u32) -> Result<CategoryDetail, ApiError> {
    let detail = Request::get(&format!("{API_BASE}/category"))
        .query([("id", id.to_string())])
        .send()
        .await?
        .json()
        .await?;
    Ok(detail)
}

/// Samples a column's worth of clues out of one remote category, dropping the
/// remote fields the board does not keep.
fn project_category(
    rng: &mut SmallRng,
    detail: CategoryDetail,
    clues_per_category: model::Slot,
) -> Result<model::Category, ApiError> {
    let clues = model::draw(rng, detail.clues, usize::from(clues_per_category))?
        .into_iter()
        .map(|clue| model::Clue::new(clue.question, clue.answer))
        .collect();
    Ok(model::Category::new(detail.title, clues))
}

/// Fetches a fresh board: one listing call, a category draw, then one detail
/// call per drawn category. Any failure propagates; there is no retry.
pub(crate) async fn fetch_board(
    seed: u64,
    config: model::BoardConfig,
) -> Result<model::Board, ApiError> {
    let mut rng = SmallRng::seed_from_u64(seed);

    let pool = get_category_pool().await?;
    log::debug!("category pool: {} candidates", pool.len());
    let picked = model::draw(&mut rng, pool, usize::from(config.categories))?;

    // detail lookups run one at a time so the column order matches the draw
    let mut categories = Vec::with_capacity(picked.len());
    for stub in picked {
        let detail = get_category_detail(stub.id).await?;
        log::trace!("category {}: {} clues", stub.id, detail.clues.len());
        categories.push(project_category(&mut rng, detail, config.clues_per_category)?);
    }

    Ok(model::Board::new(config, categories)?)
}

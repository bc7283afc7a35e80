use alloc::string::String;
use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

use crate::*;

/// Reveal marker of a single clue. Advances only forward; `Answer` is terminal.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Showing {
    Hidden,
    Question,
    Answer,
}

impl Showing {
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Answer)
    }
}

impl Default for Showing {
    fn default() -> Self {
        Self::Hidden
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum RevealOutcome {
    NoChange,
    ShowedQuestion,
    ShowedAnswer,
}

impl RevealOutcome {
    pub const fn has_update(self) -> bool {
        use RevealOutcome::*;
        match self {
            NoChange => false,
            ShowedQuestion => true,
            ShowedAnswer => true,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Clue {
    question: String,
    answer: String,
    showing: Showing,
}

impl Clue {
    pub fn new(question: String, answer: String) -> Self {
        Self {
            question,
            answer,
            showing: Showing::Hidden,
        }
    }

    pub fn question(&self) -> &str {
        &self.question
    }

    pub fn answer(&self) -> &str {
        &self.answer
    }

    pub fn showing(&self) -> Showing {
        self.showing
    }

    /// The text a cell in this state displays, `None` while still hidden.
    pub fn visible_text(&self) -> Option<&str> {
        use Showing::*;
        match self.showing {
            Hidden => None,
            Question => Some(&self.question),
            Answer => Some(&self.answer),
        }
    }

    /// Advances the reveal marker one step: hidden shows the question, the
    /// question shows the answer, and a shown answer stays put.
    pub fn reveal(&mut self) -> RevealOutcome {
        use Showing::*;
        match self.showing {
            Hidden => {
                self.showing = Question;
                RevealOutcome::ShowedQuestion
            }
            Question => {
                self.showing = Answer;
                RevealOutcome::ShowedAnswer
            }
            Answer => RevealOutcome::NoChange,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Category {
    title: String,
    clues: Vec<Clue>,
}

impl Category {
    pub fn new(title: String, clues: Vec<Clue>) -> Self {
        Self { title, clues }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn clues(&self) -> &[Clue] {
        &self.clues
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Board {
    config: BoardConfig,
    categories: Vec<Category>,
}

impl Board {
    /// Builds a board, enforcing the exact column and row counts the config
    /// declares.
    pub fn new(config: BoardConfig, categories: Vec<Category>) -> Result<Self> {
        if categories.len() != usize::from(config.categories) {
            return Err(BoardError::ShapeMismatch);
        }
        if categories
            .iter()
            .any(|category| category.clues.len() != usize::from(config.clues_per_category))
        {
            return Err(BoardError::ShapeMismatch);
        }

        Ok(Self { config, categories })
    }

    pub fn config(&self) -> BoardConfig {
        self.config
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn validate_addr(&self, addr: CellAddr) -> Result<CellAddr> {
        let (category, clue) = addr;
        if category < self.config.categories && clue < self.config.clues_per_category {
            Ok(addr)
        } else {
            Err(BoardError::InvalidAddr)
        }
    }

    pub fn clue_at(&self, addr: CellAddr) -> Result<&Clue> {
        let (category, clue) = self.validate_addr(addr)?;
        Ok(&self.categories[usize::from(category)].clues[usize::from(clue)])
    }

    /// Advances the addressed clue's reveal marker in place.
    pub fn reveal(&mut self, addr: CellAddr) -> Result<RevealOutcome> {
        let (category, clue) = self.validate_addr(addr)?;
        Ok(self.categories[usize::from(category)].clues[usize::from(clue)].reveal())
    }
}

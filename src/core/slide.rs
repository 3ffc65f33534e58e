use serde::{Deserialize, Serialize};

use crate::error::{DeckError, DeckResult};

/// One static slide descriptor. Indexes are 1-based.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slide {
    pub index: usize,
    pub title: String,
}

impl Slide {
    #[must_use]
    pub fn new(index: usize, title: impl Into<String>) -> Self {
        Self {
            index,
            title: title.into(),
        }
    }

    pub fn validate(&self) -> DeckResult<()> {
        if self.index == 0 {
            return Err(DeckError::InvalidConfig(
                "slide index is 1-based and must be > 0".to_owned(),
            ));
        }
        if self.title.trim().is_empty() {
            return Err(DeckError::InvalidConfig(format!(
                "slide {} must have a non-empty title",
                self.index
            )));
        }
        Ok(())
    }
}

/// Transition class of a slide relative to the active one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SlideMark {
    Active,
    /// Already passed; transitions out in the backward direction.
    Prev,
    Upcoming,
}

impl SlideMark {
    #[must_use]
    pub fn for_index(index: usize, current: usize) -> Self {
        match index.cmp(&current) {
            std::cmp::Ordering::Equal => Self::Active,
            std::cmp::Ordering::Less => Self::Prev,
            std::cmp::Ordering::Greater => Self::Upcoming,
        }
    }
}

/// Builds the ordered slide list from titles, assigning indexes `1..=len`.
#[must_use]
pub fn slides_from_titles<I, S>(titles: I) -> Vec<Slide>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    titles
        .into_iter()
        .enumerate()
        .map(|(offset, title)| Slide::new(offset + 1, title))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn marks_follow_index_ordering() {
        assert_eq!(SlideMark::for_index(1, 3), SlideMark::Prev);
        assert_eq!(SlideMark::for_index(3, 3), SlideMark::Active);
        assert_eq!(SlideMark::for_index(4, 3), SlideMark::Upcoming);
    }

    #[test]
    fn titles_become_one_based_slides() {
        let slides = slides_from_titles(["a", "b"]);
        assert_eq!(slides[0], Slide::new(1, "a"));
        assert_eq!(slides[1], Slide::new(2, "b"));
    }

    #[test]
    fn blank_title_is_rejected() {
        assert!(Slide::new(1, "  ").validate().is_err());
        assert!(Slide::new(0, "x").validate().is_err());
    }
}

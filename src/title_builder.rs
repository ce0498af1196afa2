//! Builds a display title from a record's title variants: picks the
//! authoritative variant, then assembles structured parts with the
//! punctuation conventions catalogers expect.

use crate::model::Title;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// One title: the primary, the first untyped, or the first in sequence.
    First,
    /// Every matching title, built independently.
    All,
}

#[derive(Debug)]
pub struct TitleBuilder {
    strategy: Strategy,
    add_punctuation: bool,
}

impl TitleBuilder {
    pub fn new(strategy: Strategy, add_punctuation: bool) -> TitleBuilder {
        TitleBuilder {
            strategy,
            add_punctuation,
        }
    }

    /// The single display title, with punctuation.
    pub fn build(titles: &[Title]) -> Option<String> {
        TitleBuilder::new(Strategy::First, true)
            .build_titles(titles)
            .into_iter()
            .next()
    }

    /// Every selected title, with punctuation.
    pub fn build_all(titles: &[Title]) -> Vec<String> {
        TitleBuilder::new(Strategy::All, true).build_titles(titles)
    }

    pub fn build_titles(&self, titles: &[Title]) -> Vec<String> {
        let mut built = Vec::new();
        for title in self.selected(titles) {
            if blank(&title.value) && title.structured_value.is_empty() {
                if !title.parallel_value.is_empty() {
                    // Parallel titles resolve exactly like top-level titles.
                    built.extend(self.build_titles(&title.parallel_value));
                    continue;
                }
            }
            if let Some(value) = self.build_title(title) {
                built.push(value);
            }
        }
        built
    }

    /// Selection cascade: primary status, then untyped, then positional.
    fn selected<'a>(&self, titles: &'a [Title]) -> Vec<&'a Title> {
        if let Some(primary) = primary_title(titles) {
            return vec![primary];
        }
        let untyped = self.untyped_titles(titles);
        if !untyped.is_empty() {
            return untyped;
        }
        match self.strategy {
            Strategy::First => titles.first().into_iter().collect(),
            Strategy::All => titles.iter().collect(),
        }
    }

    fn untyped_titles<'a>(&self, titles: &'a [Title]) -> Vec<&'a Title> {
        match self.strategy {
            Strategy::First => titles.iter().find(|t| is_untyped(t)).into_iter().collect(),
            Strategy::All => titles.iter().filter(|t| is_untyped(t)).collect(),
        }
    }

    fn build_title(&self, title: &Title) -> Option<String> {
        let result = if let Some(value) = nonblank(&title.value) {
            value.to_string()
        } else if !title.structured_value.is_empty() {
            self.title_from_structured_values(&title.structured_value, non_sorting_char_count(title))
        } else {
            return None;
        };

        let trimmed = remove_trailing_punctuation(result.trim());
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    }

    /// Combine the pieces of a structured value into a single title,
    /// respecting part order and the non-sorting character count.
    fn title_from_structured_values(&self, parts: &[Title], non_sorting_count: usize) -> String {
        let mut structured_title = String::new();
        let mut part_name_number = String::new();

        for part in parts {
            // A structured value can nest another one, e.g. a uniform title
            // where both the name and the title have internal structure.
            if !part.structured_value.is_empty() {
                return self.title_from_structured_values(&part.structured_value, non_sorting_count);
            }

            let value = match nonblank(&part.value) {
                Some(v) => v,
                None => continue,
            };

            match part.title_type.as_deref().map(str::to_lowercase).as_deref() {
                Some("nonsorting characters") => {
                    // The count tells us whether the non-sorting piece already
                    // carries its separator.
                    if value.chars().count() == non_sorting_count {
                        structured_title.push_str(value);
                    } else {
                        structured_title.push_str(value);
                        structured_title.push(' ');
                    }
                }
                Some("part name") | Some("part number") => {
                    if part_name_number.is_empty() {
                        part_name_number = self.part_name_number(parts);
                        structured_title = if !self.add_punctuation {
                            format!("{} {}", structured_title, part_name_number)
                        } else if !structured_title.is_empty() {
                            format!(
                                "{}. {}. ",
                                structured_title.trim_end_matches(|c| " .,".contains(c)),
                                part_name_number
                            )
                        } else {
                            format!("{}. ", part_name_number)
                        };
                    }
                }
                Some("main title") | Some("title") => {
                    structured_title.push_str(value);
                }
                Some("subtitle") => {
                    // Preceded by space-colon-space unless it starts the title.
                    // A leading colon on the subtitle itself is dropped.
                    let stripped = value.strip_prefix(':').unwrap_or(value).trim();
                    structured_title = if !self.add_punctuation {
                        format!("{} {}", structured_title, value)
                    } else if !structured_title.is_empty() {
                        format!(
                            "{} : {}",
                            structured_title.trim_end_matches(|c| ". :".contains(c)),
                            stripped
                        )
                    } else {
                        stripped.to_string()
                    };
                }
                _ => {}
            }
        }
        structured_title
    }

    /// Part name and part number joined in order of occurrence, separated by
    /// comma-space.
    fn part_name_number(&self, parts: &[Title]) -> String {
        let mut joined = String::new();
        for part in parts {
            match part.title_type.as_deref().map(str::to_lowercase).as_deref() {
                Some("part name") | Some("part number") => {
                    let value = match nonblank(&part.value) {
                        Some(v) => v,
                        None => continue,
                    };
                    joined = if !self.add_punctuation {
                        [joined.as_str(), value]
                            .iter()
                            .filter(|s| !s.trim().is_empty())
                            .cloned()
                            .collect::<Vec<&str>>()
                            .join(" ")
                    } else if !joined.trim().is_empty() {
                        format!("{}, {}", joined.trim_end_matches(|c| " .,".contains(c)), value)
                    } else {
                        value.to_string()
                    };
                }
                _ => {}
            }
        }
        joined
    }
}

fn primary_title(titles: &[Title]) -> Option<&Title> {
    let top_level = titles.iter().find(|t| t.status.as_deref() == Some("primary"));
    if top_level.is_some() {
        return top_level;
    }
    // Primary status on a parallel variant marks the parent as authoritative;
    // the recursion into the parallel list finds the variant itself.
    titles.iter().find(|t| {
        t.parallel_value
            .iter()
            .any(|p| p.status.as_deref() == Some("primary"))
    })
}

fn is_untyped(title: &Title) -> bool {
    if !title.parallel_value.is_empty() {
        return title.parallel_value.iter().any(is_untyped);
    }
    match title.title_type.as_deref() {
        None | Some("title") => true,
        Some(_) => false,
    }
}

fn non_sorting_char_count(title: &Title) -> usize {
    title
        .note
        .iter()
        .find(|note| {
            note.note_type
                .as_deref()
                .map(str::to_lowercase)
                .as_deref()
                == Some("nonsorting character count")
        })
        .and_then(|note| note.value.as_deref())
        .and_then(|value| value.trim().parse().ok())
        .unwrap_or(0)
}

fn remove_trailing_punctuation(title: &str) -> &str {
    title.trim_end_matches(|c| " .,;:/\\".contains(c))
}

fn blank(value: &Option<String>) -> bool {
    nonblank(value).is_none()
}

fn nonblank(value: &Option<String>) -> Option<&str> {
    match value.as_deref().map(str::trim) {
        Some("") | None => None,
        Some(v) => Some(v),
    }
}

// SPDX-License-Identifier: Apache-2.0 OR MIT
// Hierarchical category filtering

use super::LogLevel;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::{PoisonError, RwLock};

/// Per-category level thresholds
///
/// Categories are dot-separated paths such as `app.net.tcp`. The threshold
/// for a category is taken from the longest configured prefix that ends on a
/// segment boundary (the category itself included); if none is configured
/// the default threshold applies. Thresholds may be changed while loggers are
/// in use.
#[derive(Debug)]
pub struct CategoryFilter {
    default_level: AtomicU8,
    categories: RwLock<HashMap<String, LogLevel>>,
}

impl CategoryFilter {
    pub fn new(default_level: LogLevel) -> Self {
        Self {
            default_level: AtomicU8::new(default_level.as_u8()),
            categories: RwLock::new(HashMap::new()),
        }
    }

    /// Build a filter from `(category, level)` pairs
    pub fn with_categories<I, S>(default_level: LogLevel, categories: I) -> Self
    where
        I: IntoIterator<Item = (S, LogLevel)>,
        S: Into<String>,
    {
        let filter = Self::new(default_level);
        {
            let mut map = filter
                .categories
                .write()
                .unwrap_or_else(PoisonError::into_inner);
            for (category, level) in categories {
                map.insert(category.into(), level);
            }
        }
        filter
    }

    pub fn default_level(&self) -> LogLevel {
        LogLevel::from_u8(self.default_level.load(Ordering::Relaxed)).unwrap_or(LogLevel::Info)
    }

    pub fn set_default_level(&self, level: LogLevel) {
        self.default_level.store(level.as_u8(), Ordering::Relaxed);
    }

    /// Set the threshold for a category and everything below it
    pub fn set_category_level(&self, category: &str, level: LogLevel) {
        self.categories
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(category.to_string(), level);
    }

    /// Clear a category threshold (falls back to its ancestors or the default)
    pub fn clear_category_level(&self, category: &str) -> Option<LogLevel> {
        self.categories
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(category)
    }

    /// Effective threshold for `category`
    pub fn threshold(&self, category: &str) -> LogLevel {
        let categories = self
            .categories
            .read()
            .unwrap_or_else(PoisonError::into_inner);

        if !categories.is_empty() {
            let mut prefix = category;
            loop {
                if let Some(&level) = categories.get(prefix) {
                    return level;
                }
                match prefix.rfind('.') {
                    Some(pos) => prefix = &prefix[..pos],
                    None => break,
                }
            }
        }
        drop(categories);

        self.default_level()
    }

    #[inline]
    pub fn enabled(&self, level: LogLevel, category: &str) -> bool {
        level != LogLevel::None && level >= self.threshold(category)
    }

    /// Snapshot of all category thresholds
    pub fn category_levels(&self) -> HashMap<String, LogLevel> {
        self.categories
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl Default for CategoryFilter {
    fn default() -> Self {
        Self::new(LogLevel::Info)
    }
}

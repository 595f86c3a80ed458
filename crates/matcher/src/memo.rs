use std::sync::Arc;

use tracing::trace;

use crate::engine::MatchPatternBuilder;
use crate::pattern::MatchPatternSet;
use crate::types::PatternError;

/// Single-slot cache in front of a [`MatchPatternBuilder`].
///
/// The slot is keyed by the exact query string. A different query replaces
/// it; failed builds leave it untouched.
#[derive(Debug, Clone, Default)]
pub struct MemoizedBuilder {
    builder: MatchPatternBuilder,
    slot: Option<(String, Arc<MatchPatternSet>)>,
}

impl MemoizedBuilder {
    pub fn new(builder: MatchPatternBuilder) -> Self {
        Self {
            builder,
            slot: None,
        }
    }

    pub fn builder(&self) -> &MatchPatternBuilder {
        &self.builder
    }

    /// The query whose patterns are currently cached.
    pub fn cached_query(&self) -> Option<&str> {
        self.slot.as_ref().map(|(query, _)| query.as_str())
    }

    pub fn build(&mut self, query: &str) -> Result<Arc<MatchPatternSet>, PatternError> {
        if let Some((cached, set)) = &self.slot {
            if cached == query {
                trace!(query_len = query.len(), "match_patterns_cache_hit");
                return Ok(Arc::clone(set));
            }
        }

        trace!(query_len = query.len(), "match_patterns_cache_miss");
        let set = Arc::new(self.builder.build(query)?);
        self.slot = Some((query.to_string(), Arc::clone(&set)));
        Ok(set)
    }

    pub fn invalidate(&mut self) {
        self.slot = None;
    }
}

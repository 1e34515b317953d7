//! Key-space closure: every path that resolves to something in this view.

use std::collections::HashSet;
use std::iter;

use super::{ResolvedEntry, ResolvingView};
use crate::alias::is_alias_path;
use crate::error::{Error, Result};
use crate::path::Path;

impl ResolvingView {
    /// Every path this view can resolve, sorted by identity string.
    ///
    /// The stored paths of the chain and the code fallback, plus every path an
    /// alias source reaches: for a stored `p` under an alias target `t`, each
    /// source `s` aliasing `t` contributes `s + p[len(t)..]`. Sources are
    /// expanded until no new path appears. Computed once per view.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CyclicAlias`] if more than `max_closure_rounds`
    /// rounds add new paths.
    pub fn all_resolvable_paths(&self) -> Result<&[Path]> {
        self.keyspace
            .get_or_try_init(|| self.compute_keyspace())
            .map(Vec::as_slice)
    }

    fn compute_keyspace(&self) -> Result<Vec<Path>> {
        let mut paths: HashSet<Path> = self
            .chain
            .stores()
            .iter()
            .chain(iter::once(&self.fallback))
            .flat_map(|store| store.iter())
            .filter(|path| !is_alias_path(path))
            .map(Path::identity)
            .collect();

        if let Some(aliases) = self.chain.root().aliases().filter(|a| !a.is_empty()) {
            let reverse = aliases.reverse();
            let mut frontier: Vec<Path> = paths.iter().cloned().collect();
            let mut round = 0;

            while !frontier.is_empty() {
                let mut next = Vec::new();
                for path in &frontier {
                    for len in 1..=path.len() {
                        let target = Path::from_nodes(path.nodes()[..len].to_vec());
                        let Some(sources) = reverse.get(&target) else {
                            continue;
                        };
                        for source in sources {
                            let synthesized = path.replace_prefix(len, source);
                            if paths.insert(synthesized.clone()) {
                                next.push(synthesized);
                            }
                        }
                    }
                }

                if !next.is_empty() {
                    round += 1;
                    if round > self.options.max_closure_rounds {
                        next.sort_by_cached_key(Path::identity_string);
                        return Err(Error::CyclicAlias {
                            path: next[0].to_string(),
                            limit: self.options.max_closure_rounds,
                        });
                    }
                }

                log::debug!("closure round {round}: {} new paths", next.len());
                frontier = next;
            }
        }

        let mut all: Vec<Path> = paths.into_iter().collect();
        all.sort_by_cached_key(Path::identity_string);
        log::debug!("{} resolvable paths for {}", all.len(), self.locale());
        Ok(all)
    }

    /// The resolved contents of the view in key-space order.
    ///
    /// Paths that resolve to no value are skipped.
    ///
    /// # Errors
    ///
    /// See [`ResolvingView::all_resolvable_paths`] and
    /// [`ResolvingView::resolve`].
    pub fn resolved_entries(&self) -> Result<Vec<ResolvedEntry>> {
        let paths = self.all_resolvable_paths()?;
        let mut entries = Vec::with_capacity(paths.len());

        for path in paths {
            let resolved = self.resolve_cached(path)?;
            let Some(value) = resolved.value() else {
                log::trace!("{path} has no value");
                continue;
            };

            entries.push(ResolvedEntry {
                path: path.clone(),
                decorated: resolved.transplant(path).unwrap_or_else(|| path.clone()),
                value: value.to_string(),
                comment: resolved.comment().map(str::to_string),
                origin: resolved.location.origin.clone(),
            });
        }

        Ok(entries)
    }
}

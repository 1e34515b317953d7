//! Point resolution: chain scan, alias chasing, implicit fallbacks, memo.

use std::borrow::Cow;
use std::sync::Arc;

use parking_lot::RwLockUpgradableReadGuard;

use super::{AliasLocation, Origin, ResolvingView, TraceReason, TraceStep, INHERITANCE_MARKER};
use crate::chain::InheritanceChain;
use crate::error::{Error, Result};
use crate::locale::LocaleId;
use crate::path::Path;
use crate::store::PathStore;

const ALT: &str = "alt";
const COUNT: &str = "count";
const COUNT_OTHER: &str = "other";
const DISPLAY_NAME: &str = "displayName";

/// A location together with the store that answers for it.
#[derive(Debug, Clone)]
pub(super) struct Resolved {
    pub(super) location: AliasLocation,
    pub(super) store: Arc<PathStore>,
}

impl Resolved {
    pub(super) fn value(&self) -> Option<&str> {
        self.store.get(&self.location.path)
    }

    pub(super) fn comment(&self) -> Option<&str> {
        self.store.comment(&self.location.path)
    }

    /// `query` carrying the decorative attributes stored with the value.
    pub(super) fn transplant(&self, query: &Path) -> Option<Path> {
        let found = self.store.get_decorated(&self.location.path)?;
        let mut decorated = query.clone();
        for (target, source) in decorated
            .nodes_mut()
            .iter_mut()
            .rev()
            .zip(found.nodes().iter().rev())
        {
            for attribute in source.attributes().filter(|a| !a.is_distinguishing()) {
                if !target.has_attribute(attribute.name()) {
                    target.put_attribute(attribute.clone());
                }
            }
        }
        Some(decorated)
    }
}

/// The next path to try after a miss.
struct Redirect {
    path: Path,
    chain: Option<InheritanceChain>,
    reason: TraceReason,
}

fn note(
    trace: &mut Option<&mut Vec<TraceStep>>,
    locale: Option<&LocaleId>,
    path: &Path,
    reason: TraceReason,
) {
    if let Some(steps) = trace.as_deref_mut() {
        steps.push(TraceStep {
            locale: locale.cloned(),
            path: path.clone(),
            reason,
        });
    }
}

impl ResolvingView {
    /// Memoized [`ResolvingView::locate`].
    pub(super) fn resolve_cached(&self, query: &Path) -> Result<Resolved> {
        let key = query.identity();

        if let Some(hit) = self.memo.read().get(&key) {
            return Ok(hit.clone());
        }

        let memo = self.memo.upgradable_read();
        if let Some(hit) = memo.get(&key) {
            return Ok(hit.clone());
        }

        let resolved = self.locate(&key, false, None)?;
        let mut memo = RwLockUpgradableReadGuard::upgrade(memo);
        memo.insert(key, resolved.clone());
        Ok(resolved)
    }

    /// Finds where the value for `query` lives.
    ///
    /// With `skip_first`, the first store of the view's chain is ignored until
    /// the first redirection.
    pub(super) fn locate(
        &self,
        query: &Path,
        mut skip_first: bool,
        mut trace: Option<&mut Vec<TraceStep>>,
    ) -> Result<Resolved> {
        let mut chain = Cow::Borrowed(&self.chain);
        let mut path = query.clone();
        let mut redirected_from: Option<Path> = None;
        let mut hops = 0;

        loop {
            for (index, store) in chain.stores().iter().enumerate() {
                if std::mem::take(&mut skip_first) {
                    continue;
                }

                match store.get(&path) {
                    None => note(&mut trace, Some(store.locale()), &path, TraceReason::Absent),
                    Some(INHERITANCE_MARKER) => note(
                        &mut trace,
                        Some(store.locale()),
                        &path,
                        TraceReason::InheritanceMarker,
                    ),
                    Some(_) => {
                        note(&mut trace, Some(store.locale()), &path, TraceReason::Value);
                        let locale = store.locale().clone();
                        let origin = match redirected_from {
                            Some(alias) => Origin::Aliased { locale, alias },
                            None if index == 0 => Origin::Local { locale },
                            None => Origin::Inherited { locale },
                        };
                        return Ok(Resolved {
                            location: AliasLocation { path, origin },
                            store: Arc::clone(store),
                        });
                    }
                }
            }

            let Some(redirect) = self.redirect(&chain, &path)? else {
                note(&mut trace, None, &path, TraceReason::Fallback);
                return Ok(Resolved {
                    location: AliasLocation {
                        path,
                        origin: Origin::Fallback,
                    },
                    store: Arc::clone(&self.fallback),
                });
            };

            hops += 1;
            if hops > self.options.max_alias_hops {
                return Err(Error::CyclicAlias {
                    path: query.to_string(),
                    limit: self.options.max_alias_hops,
                });
            }

            log::trace!("{path} redirected to {}", redirect.path);
            let locale = redirect.chain.as_ref().map_or_else(
                || chain.locale().clone(),
                |target| target.locale().clone(),
            );
            note(&mut trace, Some(&locale), &redirect.path, redirect.reason);

            redirected_from = Some(std::mem::replace(&mut path, redirect.path));
            if let Some(target) = redirect.chain {
                chain = Cow::Owned(target);
            }
        }
    }

    /// The alias or implicit fallback applying to a missed `path`, if any.
    fn redirect(&self, chain: &InheritanceChain, path: &Path) -> Result<Option<Redirect>> {
        if let Some(directive) = chain.root().aliases().and_then(|a| a.lookup(path)) {
            if let Some(rewritten) = directive.rewrite(path) {
                match directive.target_locale() {
                    Some(target) if target != chain.locale() => {
                        return Ok(Some(Redirect {
                            path: rewritten,
                            chain: Some(self.chain_for(target)?),
                            reason: TraceReason::Alias,
                        }));
                    }
                    _ if rewritten != *path => {
                        return Ok(Some(Redirect {
                            path: rewritten,
                            chain: None,
                            reason: TraceReason::Alias,
                        }));
                    }
                    // Locale-only alias to the locale already being searched
                    _ => {}
                }
            }
        }

        if self.options.implicit_alt_fallback && path.contains_attribute(ALT) {
            let mut stripped = path.clone();
            for node in stripped.nodes_mut() {
                node.remove_attribute(ALT);
            }
            return Ok(Some(Redirect {
                path: stripped,
                chain: None,
                reason: TraceReason::RemovedAlt,
            }));
        }

        if self.options.implicit_count_fallback && path.contains_attribute(COUNT) {
            if let Some(other) = count_fallback(path) {
                return Ok(Some(Redirect {
                    path: other,
                    chain: None,
                    reason: TraceReason::ChangedCount,
                }));
            }
        }

        Ok(None)
    }

    /// The chain to continue in after an alias names `locale`.
    fn chain_for(&self, locale: &LocaleId) -> Result<InheritanceChain> {
        if let Some(catalog) = &self.catalog {
            return catalog.chain(locale);
        }
        self.chain
            .suffix_from(locale)
            .ok_or_else(|| Error::UnknownLocale {
                id: locale.to_string(),
            })
    }
}

/// `count` values become `other`; under `displayName`, `count="other"` is
/// dropped instead.
fn count_fallback(path: &Path) -> Option<Path> {
    let mut other = path.clone();
    let mut changed = false;
    for node in other.nodes_mut() {
        if node.attribute(COUNT).is_some_and(|c| c != COUNT_OTHER) {
            changed |= node.set_attribute_value(COUNT, COUNT_OTHER);
        }
    }
    if changed {
        return Some(other);
    }

    if path.contains_element(DISPLAY_NAME) {
        for node in other.nodes_mut() {
            node.remove_attribute(COUNT);
        }
        return Some(other);
    }

    None
}

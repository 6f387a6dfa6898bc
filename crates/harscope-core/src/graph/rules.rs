//! Edge inference rules, tried in order for each entry.

use std::collections::HashMap;

use crate::normalize::CanonicalEntry;

use super::{Edge, EdgeReason};

/// Lookups over the whole capture, built once per graph.
#[derive(Debug, Default)]
pub(crate) struct Lookup<'a> {
    /// URL -> id of the last entry with that URL.
    pub url_to_id: HashMap<&'a str, usize>,
    /// Host -> id of the first "document" entry on that host.
    pub host_to_first_doc: HashMap<&'a str, usize>,
}

impl<'a> Lookup<'a> {
    pub fn build(entries: &'a [CanonicalEntry]) -> Self {
        let mut lookup = Lookup::default();
        for e in entries {
            if !e.url.is_empty() {
                lookup.url_to_id.insert(&e.url, e.id);
            }
            if e.resource_type == "document" && !e.host.is_empty() {
                lookup.host_to_first_doc.entry(&e.host).or_insert(e.id);
            }
        }
        lookup
    }
}

pub(crate) type Rule = fn(&Lookup<'_>, &CanonicalEntry) -> Option<Edge>;

/// Priority order: an initiator match beats the same-host document fallback.
pub(crate) const RULES: [Rule; 2] = [initiator_rule, document_rule];

/// The single inbound edge for `entry`, if any rule matches.
pub(crate) fn infer_edge(lookup: &Lookup<'_>, entry: &CanonicalEntry) -> Option<Edge> {
    RULES.iter().find_map(|rule| rule(lookup, entry))
}

/// Edge from the entry whose URL equals this entry's initiator URL.
pub(crate) fn initiator_rule(lookup: &Lookup<'_>, entry: &CanonicalEntry) -> Option<Edge> {
    let url = entry.initiator_ref.url()?;
    let source = *lookup.url_to_id.get(url)?;
    Some(Edge {
        source,
        target: entry.id,
        reason: EdgeReason::Initiator,
    })
}

/// Edge from the first document on the same host, unless that is this entry.
///
/// Does not check that the document started before this entry.
pub(crate) fn document_rule(lookup: &Lookup<'_>, entry: &CanonicalEntry) -> Option<Edge> {
    if entry.host.is_empty() {
        return None;
    }
    let source = *lookup.host_to_first_doc.get(entry.host.as_str())?;
    (source != entry.id).then_some(Edge {
        source,
        target: entry.id,
        reason: EdgeReason::Document,
    })
}

use metrics::counter;

use crate::types::Role;

pub fn record_fetch_succeeded(role: Role) {
    counter!("haven_stats_fetch_total", "role" => role.as_str(), "outcome" => "ok").increment(1);
}

pub fn record_fetch_failed(role: Role, kind: &'static str) {
    counter!("haven_stats_fetch_total", "role" => role.as_str(), "outcome" => kind).increment(1);
}

pub fn record_stale_discarded(role: Role) {
    counter!("haven_stats_stale_total", "role" => role.as_str()).increment(1);
}

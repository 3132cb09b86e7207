use crate::storage::MAX_PAGE_SIZE;

pub struct Utils;

impl Utils {
    pub fn validate_date_range(manufacturing_date: u64, expiry_date: u64) -> bool {
        expiry_date > manufacturing_date
    }

    /// A medicine expiring exactly at `now` is still valid.
    pub fn is_expired_at(expiry_date: u64, now: u64) -> bool {
        now > expiry_date
    }

    /// Half-open `[start, end)` window over `total` entries, with `limit`
    /// clamped to `MAX_PAGE_SIZE`.
    pub fn page_range(offset: u64, limit: u32, total: u64) -> (u64, u64) {
        let limit = limit.min(MAX_PAGE_SIZE) as u64;
        let start = offset.min(total);
        let end = offset.saturating_add(limit).min(total);
        (start, end)
    }
}

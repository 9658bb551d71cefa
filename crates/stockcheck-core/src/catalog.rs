/// SKUs checked when a request does not name any.
pub const DEFAULT_SKUS: [&str; 6] = [
    "6364255", // Switch, neon red/blue
    "6364253", // Switch, gray
    "6257142", // Switch Lite, yellow
    "6257148", // Switch Lite, coral
    "6257139", // Switch Lite, turquoise
    "6257135", // Switch Lite, gray
];

/// Owned copy of [`DEFAULT_SKUS`] in catalog order.
#[must_use]
pub fn default_skus() -> Vec<String> {
    DEFAULT_SKUS.iter().map(|s| (*s).to_string()).collect()
}

use std::str::FromStr;

use bazaar_models::v0;
use once_cell::sync::Lazy;
use regex::Regex;
use ulid::Ulid;

/// Regex for external add-on identifiers
///
/// Matches either the braced-uuid form or `name@host`,
/// both of which are invalid in a slug.
pub static RE_GUID: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^(\{[0-9a-fA-F]{8}-([0-9a-fA-F]{4}-){3}[0-9a-fA-F]{12}\}|[a-zA-Z0-9-._]*@[a-zA-Z0-9-._]+)$",
    )
    .unwrap()
});

auto_derived!(
    /// Distributable extension package tracked by the catalog
    pub struct Addon {
        /// Unique Id
        #[serde(rename = "_id")]
        pub id: String,
        /// URL name of the add-on
        pub slug: String,
        /// Canonical external identifier
        pub guid: String,
        /// Display name
        pub name: String,
        /// Review status
        pub status: AddonStatus,
        /// Whether the developer has hidden the listing
        #[serde(skip_serializing_if = "crate::if_false", default)]
        pub disabled_by_user: bool,
    }

    /// Review status of an add-on
    pub enum AddonStatus {
        /// Awaiting review
        Nominated,
        /// Approved for public listing
        Approved,
        /// Disabled by a moderator
        Disabled,
        /// Deleted by its developer
        Deleted,
    }
);

/// How an externally-supplied identifier should be resolved
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum AddonLookup {
    Id,
    Guid,
    Slug,
}

impl Addon {
    /// Determine how an externally-supplied identifier resolves against
    /// the catalog: guid-shaped identifiers never match ids or slugs.
    pub fn lookup_field(identifier: &str) -> AddonLookup {
        if RE_GUID.is_match(identifier) {
            AddonLookup::Guid
        } else if Ulid::from_str(identifier).is_ok() {
            AddonLookup::Id
        } else {
            AddonLookup::Slug
        }
    }

    /// Whether this add-on is visible to the public
    pub fn is_public(&self) -> bool {
        matches!(self.status, AddonStatus::Approved) && !self.disabled_by_user
    }

    /// Convert to public-facing structure
    pub fn into_public(self) -> v0::Addon {
        v0::Addon {
            id: self.id,
            slug: self.slug,
            guid: self.guid,
            name: self.name,
        }
    }
}

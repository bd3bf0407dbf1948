//! Link primitives shared by both hypermedia representations.
//!
//! A [`LinkBase`] anchors every generated `href` to the service's public base
//! URL so representations never leak internal bind addresses. Relation names
//! are typed via [`Relation`] to keep the wire vocabulary in one place.

use serde::{Deserialize, Serialize};
use url::Url;

/// Failures raised while resolving link targets.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LinkError {
    /// The configured base URL could not be parsed or cannot carry paths.
    #[error("invalid link base URL: {0}")]
    InvalidBase(String),
    /// A path could not be joined onto the base URL.
    #[error("cannot resolve {path:?} against the link base")]
    Unresolvable {
        /// The path that failed to resolve.
        path: String,
    },
}

/// Public base URL against which resource paths are resolved.
///
/// The base is normalised to end with a trailing slash so joining keeps any
/// path prefix the deployment mounts the API under.
///
/// # Examples
/// ```
/// use hypermedia::LinkBase;
///
/// let base = LinkBase::parse("https://shop.example.com/api").expect("valid base");
/// let href = base.resolve("orders/42").expect("resolvable path");
/// assert_eq!(href, "https://shop.example.com/api/orders/42");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkBase(Url);

impl LinkBase {
    /// Parse and normalise a base URL.
    ///
    /// # Errors
    /// Returns [`LinkError::InvalidBase`] when the value is not an absolute
    /// URL, cannot carry a path, or has a query or fragment component.
    pub fn parse(value: &str) -> Result<Self, LinkError> {
        let mut url = Url::parse(value).map_err(|err| LinkError::InvalidBase(err.to_string()))?;
        if url.cannot_be_a_base() {
            return Err(LinkError::InvalidBase(format!(
                "{value:?} cannot carry a path"
            )));
        }
        if url.query().is_some() || url.fragment().is_some() {
            return Err(LinkError::InvalidBase(format!(
                "{value:?} must not have a query or fragment"
            )));
        }
        if !url.path().ends_with('/') {
            let path = format!("{}/", url.path());
            url.set_path(&path);
        }
        Ok(Self(url))
    }

    /// Resolve a resource path to an absolute `href`.
    ///
    /// Leading slashes are stripped so callers may pass either `orders/42`
    /// or `/orders/42`; both stay under the base's path prefix. Paths
    /// containing `..` segments are rejected, so resolution never escapes
    /// the base.
    ///
    /// # Errors
    /// Returns [`LinkError::Unresolvable`] when the path carries a `..`
    /// segment or cannot be joined onto the base.
    pub fn resolve(&self, path: &str) -> Result<String, LinkError> {
        let relative = path.trim_start_matches('/');
        if relative.split('/').any(|segment| segment == "..") {
            return Err(LinkError::Unresolvable {
                path: path.to_owned(),
            });
        }
        self.0
            .join(relative)
            .map(Into::into)
            .map_err(|_| LinkError::Unresolvable {
                path: path.to_owned(),
            })
    }

    /// Resolve a path into a HAL [`Link`] object.
    ///
    /// # Errors
    /// Propagates [`LinkError::Unresolvable`] from [`LinkBase::resolve`].
    pub fn link(&self, path: &str) -> Result<Link, LinkError> {
        Ok(Link::new(self.resolve(path)?))
    }
}

/// A HAL link object: an `href` plus optional presentation hints.
///
/// Optional fields are omitted from the wire form when unset. The target
/// media type serialises as `type`, per the HAL draft.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Link {
    /// Target URL, or URI template when `templated` is set.
    pub href: String,
    /// Marks `href` as an RFC 6570 URI template.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub templated: Option<bool>,
    /// Human-readable label for the link.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Expected media type of the link target.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub media_type: Option<String>,
}

impl Link {
    /// Create a plain link to `href`.
    #[must_use]
    pub fn new(href: impl Into<String>) -> Self {
        Self {
            href: href.into(),
            templated: None,
            title: None,
            media_type: None,
        }
    }

    /// Mark the link's `href` as a URI template.
    #[must_use]
    pub const fn templated(mut self) -> Self {
        self.templated = Some(true);
        self
    }

    /// Attach a human-readable title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Declare the media type of the link target.
    #[must_use]
    pub fn with_media_type(mut self, media_type: impl Into<String>) -> Self {
        self.media_type = Some(media_type.into());
        self
    }
}

/// Relation names used by the storefront resource graph.
///
/// The first three are registered IANA relations; the rest are the domain
/// relations the storefront documents use. Serialises to the lowercase wire
/// name (`self`, `items`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Relation {
    /// Canonical URL of the current resource.
    #[serde(rename = "self")]
    Self_,
    /// The collection a resource belongs to.
    Collection,
    /// A member of a collection.
    Item,
    /// Line items of an order.
    Items,
    /// The customer who placed an order.
    Customer,
    /// The product a line item refers to.
    Product,
}

impl Relation {
    /// Wire name of the relation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Self_ => "self",
            Self::Collection => "collection",
            Self::Item => "item",
            Self::Items => "items",
            Self::Customer => "customer",
            Self::Product => "product",
        }
    }
}

impl std::fmt::Display for Relation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests;

// ABOUTME: Route metadata and path-parameter parsing for the user collection route.
// ABOUTME: Maps "/user/{user_id}/{caty}" (optionally under "/hpoi") to typed RouteParams.

use crate::category::Category;
use crate::error::ParseError;

/// Namespace under which the host service mounts this route.
pub const NAMESPACE: &str = "hpoi";

/// Declarative description of a route as the host service registers it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteInfo {
    pub path: &'static str,
    pub example: &'static str,
    pub name: &'static str,
    pub parameters: &'static [(&'static str, &'static str)],
    pub maintainers: &'static [&'static str],
}

/// The user collection route.
pub const USER_ROUTE: RouteInfo = RouteInfo {
    path: "/user/:user_id/:caty",
    example: "/hpoi/user/116297/buy",
    name: "用户动态",
    parameters: &[("user_id", "用户ID"), ("caty", "类别, 见下表")],
    maintainers: &["DIYgod", "luyuhuang"],
};

/// Parameters extracted from a route path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteParams {
    pub user_id: String,
    pub category: Category,
}

impl RouteParams {
    pub fn new(user_id: impl Into<String>, category: Category) -> Self {
        Self {
            user_id: user_id.into(),
            category,
        }
    }

    /// Parses `/user/{user_id}/{caty}` or `/hpoi/user/{user_id}/{caty}`.
    ///
    /// A query string or fragment is ignored and one trailing slash is allowed.
    /// The user id is kept verbatim.
    pub fn from_path(path: &str) -> Result<Self, ParseError> {
        let trimmed = path
            .split(['?', '#'])
            .next()
            .unwrap_or_default()
            .trim();
        let trimmed = trimmed.strip_prefix('/').unwrap_or(trimmed);
        let trimmed = trimmed.strip_suffix('/').unwrap_or(trimmed);

        let mut segments: Vec<&str> = trimmed.split('/').collect();
        if segments.first() == Some(&NAMESPACE) {
            segments.remove(0);
        }

        match segments.as_slice() {
            ["user", user_id, caty] if !user_id.is_empty() => {
                let category = caty.parse::<Category>()?;
                Ok(Self::new(*user_id, category))
            }
            _ => Err(ParseError::invalid_route(
                path,
                Some(anyhow::anyhow!("expected {}", USER_ROUTE.path)),
            )),
        }
    }
}

/// Renders the category table shown in the route documentation.
pub fn category_table() -> String {
    let labels: Vec<&str> = Category::ALL.iter().map(|c| c.label()).collect();
    let keys: Vec<&str> = Category::ALL.iter().map(|c| c.key()).collect();
    let rule: Vec<&str> = Category::ALL.iter().map(|_| "---").collect();
    format!(
        "| {} |\n| {} |\n| {} |\n",
        labels.join(" | "),
        rule.join(" | "),
        keys.join(" | ")
    )
}

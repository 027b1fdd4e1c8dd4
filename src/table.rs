// Immutable route table, built once from routes::declarations() and shared read-only

use std::collections::{HashMap, HashSet};
use std::fmt;

use axum::http::Method;
use serde::Serialize;

use crate::error::{ResolveError, TableError, UrlError};
use crate::pattern::{Params, PathPattern};

/// Role-based prefix group a route is declared under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum RouteGroup {
    /// Top-level entries (`/`, `/login`)
    #[serde(rename = "none")]
    Ungrouped,
    Booking,
    Admin,
    Doctor,
    Frontdesk,
}

impl RouteGroup {
    /// Shared path segment and name namespace, if any.
    pub fn prefix(self) -> Option<&'static str> {
        match self {
            RouteGroup::Ungrouped => None,
            RouteGroup::Booking => Some("booking"),
            RouteGroup::Admin => Some("admin"),
            RouteGroup::Doctor => Some("doctor"),
            RouteGroup::Frontdesk => Some("frontdesk"),
        }
    }
}

impl fmt::Display for RouteGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.prefix().unwrap_or("none"))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteAction {
    /// Render the view with this identifier
    View(&'static str),
    /// Redirect to the path of the named route
    Redirect(&'static str),
}

/// One declared route.
#[derive(Debug, Clone)]
pub struct RouteEntry {
    pub method: Method,
    pub path: &'static str,
    pub name: Option<&'static str>,
    pub action: RouteAction,
    pub group: RouteGroup,
}

impl RouteEntry {
    pub fn view(
        group: RouteGroup,
        path: &'static str,
        name: &'static str,
        view: &'static str,
    ) -> Self {
        Self {
            method: Method::GET,
            path,
            name: Some(name),
            action: RouteAction::View(view),
            group,
        }
    }

    pub fn redirect(group: RouteGroup, path: &'static str, target: &'static str) -> Self {
        Self {
            method: Method::GET,
            path,
            name: None,
            action: RouteAction::Redirect(target),
            group,
        }
    }

    /// Whether this entry answers `method`. GET routes also answer HEAD.
    fn accepts(&self, method: &Method) -> bool {
        self.method == *method || (self.method == Method::GET && *method == Method::HEAD)
    }
}

/// Outcome of a successful resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    View {
        name: &'static str,
        view: &'static str,
        group: RouteGroup,
        params: Params,
    },
    Redirect { location: String },
}

/// Serializable description of a route for listings.
#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
pub struct RouteInfo {
    pub method: String,
    pub path: String,
    pub name: Option<String>,
    pub view: Option<String>,
    pub redirect_to: Option<String>,
    pub group: RouteGroup,
}

#[derive(Debug)]
enum CompiledAction {
    View {
        name: &'static str,
        view: &'static str,
    },
    /// Target path, resolved at construction
    Redirect(String),
}

#[derive(Debug)]
struct CompiledRoute {
    entry: RouteEntry,
    pattern: PathPattern,
    action: CompiledAction,
}

#[derive(Debug)]
pub struct RouteTable {
    routes: Vec<CompiledRoute>,
    by_name: HashMap<&'static str, usize>,
}

impl RouteTable {
    pub fn new(entries: Vec<RouteEntry>) -> Result<Self, TableError> {
        let mut parsed = Vec::with_capacity(entries.len());
        let mut by_name = HashMap::new();
        let mut shapes = HashSet::new();

        for entry in entries {
            let pattern = PathPattern::parse(entry.path)?;
            check_group(&entry)?;

            // `{id}` and `{key}` in the same position match the same requests
            let shape = (entry.group, entry.method.clone(), pattern.shape());
            if !shapes.insert(shape) {
                return Err(TableError::DuplicatePath {
                    method: entry.method.clone(),
                    path: entry.path.to_string(),
                    group: entry.group.to_string(),
                });
            }
            if let Some(name) = entry.name {
                if by_name.insert(name, parsed.len()).is_some() {
                    return Err(TableError::DuplicateName(name.to_string()));
                }
            }

            parsed.push((entry, pattern));
        }

        // Redirect targets may be declared after the redirect itself
        let mut routes = Vec::with_capacity(parsed.len());
        for (entry, pattern) in &parsed {
            let action = match (entry.action.clone(), entry.name) {
                (RouteAction::View(view), Some(name)) => CompiledAction::View { name, view },
                (RouteAction::View(_), None) => {
                    return Err(TableError::UnnamedView(entry.path.to_string()));
                }
                (RouteAction::Redirect(target), _) => {
                    let location = format_named(&parsed, &by_name, target, &Params::new())
                        .map_err(|err| redirect_error(entry.path, target, err))?;
                    CompiledAction::Redirect(location)
                }
            };
            routes.push(CompiledRoute {
                entry: entry.clone(),
                pattern: pattern.clone(),
                action,
            });
        }

        tracing::debug!("Route table built with {} routes", routes.len());
        Ok(Self { routes, by_name })
    }

    /// Resolve a request to the first matching route.
    pub fn resolve(&self, method: &Method, path: &str) -> Result<Resolution, ResolveError> {
        let mut allowed: Vec<Method> = Vec::new();

        for route in &self.routes {
            let Some(params) = route.pattern.matches(path) else {
                continue;
            };

            if !route.entry.accepts(method) {
                push_allowed(&mut allowed, &route.entry.method);
                continue;
            }

            let resolution = match route.action {
                CompiledAction::Redirect(ref location) => Resolution::Redirect {
                    location: location.clone(),
                },
                CompiledAction::View { name, view } => Resolution::View {
                    name,
                    view,
                    group: route.entry.group,
                    params,
                },
            };
            return Ok(resolution);
        }

        if allowed.is_empty() {
            Err(ResolveError::NotFound {
                path: path.to_string(),
            })
        } else {
            Err(ResolveError::MethodNotAllowed {
                method: method.clone(),
                path: path.to_string(),
                allowed,
            })
        }
    }

    /// Build the path of a named route.
    pub fn url_for(&self, name: &str, params: &Params) -> Result<String, UrlError> {
        let index = self
            .by_name
            .get(name)
            .ok_or_else(|| UrlError::UnknownRoute(name.to_string()))?;
        self.routes[*index].pattern.format(name, params)
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Route names in declaration order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.routes.iter().filter_map(|r| r.entry.name)
    }

    /// Distinct view identifiers referenced by the table.
    pub fn views(&self) -> Vec<&'static str> {
        let mut seen = HashSet::new();
        self.routes
            .iter()
            .filter_map(|r| match r.action {
                CompiledAction::View { view, .. } => Some(view),
                CompiledAction::Redirect(_) => None,
            })
            .filter(|view| seen.insert(*view))
            .collect()
    }

    pub fn describe(&self) -> Vec<RouteInfo> {
        self.routes
            .iter()
            .map(|r| {
                let (view, redirect_to) = match r.entry.action {
                    RouteAction::View(view) => (Some(view.to_string()), None),
                    RouteAction::Redirect(target) => (None, Some(target.to_string())),
                };
                RouteInfo {
                    method: r.entry.method.to_string(),
                    path: r.entry.path.to_string(),
                    name: r.entry.name.map(str::to_string),
                    view,
                    redirect_to,
                    group: r.entry.group,
                }
            })
            .collect()
    }
}

fn format_named(
    parsed: &[(RouteEntry, PathPattern)],
    by_name: &HashMap<&'static str, usize>,
    name: &str,
    params: &Params,
) -> Result<String, UrlError> {
    let index = by_name
        .get(name)
        .ok_or_else(|| UrlError::UnknownRoute(name.to_string()))?;
    parsed[*index].1.format(name, params)
}

fn redirect_error(from: &str, target: &str, err: UrlError) -> TableError {
    let from = from.to_string();
    let target = target.to_string();
    match err {
        UrlError::UnknownRoute(_) => TableError::UnknownRedirectTarget { from, target },
        UrlError::MissingParameter { .. } => {
            TableError::ParameterisedRedirectTarget { from, target }
        }
    }
}

fn check_group(entry: &RouteEntry) -> Result<(), TableError> {
    let Some(prefix) = entry.group.prefix() else {
        return Ok(());
    };
    let mismatch = || TableError::GroupMismatch {
        name: entry.name.unwrap_or(entry.path).to_string(),
        group: entry.group.to_string(),
    };

    let under_prefix = entry
        .path
        .strip_prefix('/')
        .and_then(|p| p.strip_prefix(prefix))
        .is_some_and(|rest| rest.starts_with('/'));
    if !under_prefix {
        return Err(mismatch());
    }

    if let Some(name) = entry.name {
        let namespaced = name
            .strip_prefix(prefix)
            .is_some_and(|rest| rest.len() > 1 && rest.starts_with('.'));
        if !namespaced {
            return Err(mismatch());
        }
    }
    Ok(())
}

fn push_allowed(allowed: &mut Vec<Method>, method: &Method) {
    let mut add = |m: &Method| {
        if !allowed.contains(m) {
            allowed.push(m.clone());
        }
    };
    add(method);
    if *method == Method::GET {
        add(&Method::HEAD);
    }
}

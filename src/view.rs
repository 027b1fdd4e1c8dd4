// View rendering: the route table only names a view, renderers turn it into a page

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::error::RenderError;
use crate::pattern::Params;

/// Data handed to the renderer alongside the view identifier.
#[derive(Debug, Clone)]
pub struct ViewContext<'a> {
    pub route: &'a str,
    pub params: &'a Params,
}

pub trait ViewRenderer: Send + Sync {
    fn render(&self, view: &str, context: &ViewContext<'_>) -> Result<String, RenderError>;
}

/// Emits a minimal HTML shell naming the view. Used when no views directory is
/// configured.
#[derive(Debug, Default, Clone)]
pub struct PlaceholderRenderer;

impl ViewRenderer for PlaceholderRenderer {
    fn render(&self, view: &str, context: &ViewContext<'_>) -> Result<String, RenderError> {
        let params = context
            .params
            .iter()
            .map(|(k, v)| format!(" data-param-{}=\"{}\"", k, escape_html(v)))
            .collect::<String>();

        Ok(format!(
            "<!DOCTYPE html>\n<html>\n<head><title>{view}</title></head>\n\
             <body data-view=\"{view}\" data-route=\"{route}\"{params}></body>\n</html>\n",
            view = escape_html(view),
            route = escape_html(context.route),
            params = params,
        ))
    }
}

/// Serves pre-loaded HTML files.
///
/// `admin.add-appointment` maps to `<dir>/admin/add-appointment.html`.
#[derive(Debug, Clone)]
pub struct FileViewRenderer {
    pages: HashMap<String, String>,
}

impl FileViewRenderer {
    /// Read every listed view from `dir`. Any missing file is an error.
    pub fn load<'a>(
        dir: &Path,
        views: impl IntoIterator<Item = &'a str>,
    ) -> Result<Self, RenderError> {
        let mut pages = HashMap::new();
        for view in views {
            let file = view_path(dir, view);
            let contents = std::fs::read_to_string(&file).map_err(|source| {
                if source.kind() == std::io::ErrorKind::NotFound {
                    RenderError::ViewNotFound(view.to_string())
                } else {
                    RenderError::Io {
                        view: view.to_string(),
                        source,
                    }
                }
            })?;
            tracing::debug!("Loaded view {} from {}", view, file.display());
            pages.insert(view.to_string(), contents);
        }
        Ok(Self { pages })
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }
}

impl ViewRenderer for FileViewRenderer {
    fn render(&self, view: &str, _context: &ViewContext<'_>) -> Result<String, RenderError> {
        self.pages
            .get(view)
            .cloned()
            .ok_or_else(|| RenderError::ViewNotFound(view.to_string()))
    }
}

fn view_path(dir: &Path, view: &str) -> PathBuf {
    let mut path = dir.to_path_buf();
    for part in view.split('.') {
        path.push(part);
    }
    path.set_extension("html");
    path
}

fn escape_html(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholder_names_view_and_params() {
        let mut params = Params::new();
        params.insert("id".to_string(), "<42>".to_string());
        let context = ViewContext {
            route: "doctor.appointment-details",
            params: &params,
        };

        let html = PlaceholderRenderer
            .render("doctor.appointment-details", &context)
            .unwrap();

        assert!(html.contains("data-view=\"doctor.appointment-details\""));
        assert!(html.contains("data-route=\"doctor.appointment-details\""));
        assert!(html.contains("data-param-id=\"&lt;42&gt;\""));
    }

    #[test]
    fn test_view_path_maps_dots_to_directories() {
        let path = view_path(Path::new("/views"), "admin.add-appointment");
        assert_eq!(path, PathBuf::from("/views/admin/add-appointment.html"));

        let path = view_path(Path::new("/views"), "public.booking-step1");
        assert_eq!(path, PathBuf::from("/views/public/booking-step1.html"));
    }

    #[test]
    fn test_file_renderer_serves_loaded_views() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("auth")).unwrap();
        std::fs::write(dir.path().join("auth/login.html"), "<h1>Sign in</h1>").unwrap();

        let renderer = FileViewRenderer::load(dir.path(), ["auth.login"]).unwrap();
        assert_eq!(renderer.len(), 1);

        let params = Params::new();
        let context = ViewContext {
            route: "login",
            params: &params,
        };
        assert_eq!(
            renderer.render("auth.login", &context).unwrap(),
            "<h1>Sign in</h1>"
        );
        assert!(matches!(
            renderer.render("admin.dashboard", &context),
            Err(RenderError::ViewNotFound(_))
        ));
    }

    #[test]
    fn test_file_renderer_missing_view_fails_load() {
        let dir = tempfile::tempdir().unwrap();
        let err = FileViewRenderer::load(dir.path(), ["admin.calendar"]).unwrap_err();
        assert!(matches!(err, RenderError::ViewNotFound(ref v) if v == "admin.calendar"));
    }
}

//! Page rendering

use landing_core::{Error, Result};
use std::io;
use std::path::{Component, Path, PathBuf};

/// Produces the HTML of a named page
pub trait PageRenderer: Send + Sync {
	fn render(&self, name: &str) -> Result<String>;
}

/// Serves `<root>/<name>.html` files as they are
#[derive(Debug, Clone)]
pub struct TemplateDirectory {
	root: PathBuf,
}

impl TemplateDirectory {
	/// # Examples
	///
	/// ```
	/// use landing::render::{PageRenderer, TemplateDirectory};
	///
	/// let pages = TemplateDirectory::new("/nonexistent");
	/// assert!(pages.render("index").is_err());
	/// ```
	pub fn new(root: impl Into<PathBuf>) -> Self {
		Self { root: root.into() }
	}

	pub fn root(&self) -> &Path {
		&self.root
	}

	/// Path of the file backing `name`; `None` if `name` is not a plain file stem
	pub fn path_for(&self, name: &str) -> Option<PathBuf> {
		let mut components = Path::new(name).components();
		match (components.next(), components.next()) {
			(Some(Component::Normal(_)), None) => Some(self.root.join(format!("{}.html", name))),
			_ => None,
		}
	}
}

impl PageRenderer for TemplateDirectory {
	fn render(&self, name: &str) -> Result<String> {
		let path = self
			.path_for(name)
			.ok_or_else(|| Error::TemplateNotFound(name.to_string()))?;

		std::fs::read_to_string(&path).map_err(|error| match error.kind() {
			io::ErrorKind::NotFound => Error::TemplateNotFound(path.display().to_string()),
			_ => Error::Io(error),
		})
	}
}

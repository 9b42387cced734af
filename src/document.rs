//! The document the carousel lives in: where containers are, how many slides they
//! hold and how wide the viewport is.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::config::ContainerLocator;
use crate::constants::DEFAULT_SLIDE_CLASS;

/// Opaque reference to a presentation surface owned by the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContainerHandle(pub u32);

pub trait Document {
    fn contains(&self, container: ContainerHandle) -> bool;
    fn element_by_id(&self, id: &str) -> Option<ContainerHandle>;
    /// Containers matching `selector`, in document order.
    fn query_selector_all(&self, selector: &str) -> Vec<ContainerHandle>;
    fn slide_count(&self, container: ContainerHandle, slide_class: &str) -> usize;
    fn viewport_width(&self) -> u32;
}

/// Resolve a locator to the containers it designates.
pub fn locate<D: Document + ?Sized>(document: &D, locator: ContainerLocator<'_>) -> Vec<ContainerHandle> {
    match locator {
        ContainerLocator::Element(handle) => {
            if document.contains(handle) { vec![handle] } else { Vec::new() }
        }
        ContainerLocator::Id(id) => document.element_by_id(id).into_iter().collect(),
        ContainerLocator::Selector(selector) => document.query_selector_all(selector),
    }
}

/// Minimal selector support: `#id`, `.class` or a bare class name.
fn selector_matches(selector: &str, id: Option<&str>, classes: &[String]) -> bool {
    if let Some(wanted) = selector.strip_prefix('#') {
        id == Some(wanted)
    } else {
        let wanted = selector.strip_prefix('.').unwrap_or(selector);
        classes.iter().any(|class| class == wanted)
    }
}

// --- In-memory document ---

#[derive(Debug, Clone)]
struct Element {
    handle: ContainerHandle,
    id: Option<String>,
    classes: Vec<String>,
    slide_classes: Vec<String>,
}

/// A document described up front; handy for embedding and for tests.
#[derive(Debug, Clone)]
pub struct StaticDocument {
    elements: Vec<Element>,
    width: u32,
}

impl StaticDocument {
    pub fn new(width: u32) -> Self {
        Self { elements: Vec::new(), width }
    }

    /// Add a container holding `slides` default-classed slides and return its handle.
    pub fn add_container(&mut self, id: Option<&str>, class: &str, slides: usize) -> ContainerHandle {
        let handle = ContainerHandle(self.elements.len() as u32);
        self.elements.push(Element {
            handle,
            id: id.map(str::to_string),
            classes: vec![class.to_string()],
            slide_classes: vec![DEFAULT_SLIDE_CLASS.to_string(); slides],
        });
        handle
    }

    pub fn with_container(mut self, id: Option<&str>, class: &str, slides: usize) -> Self {
        self.add_container(id, class, slides);
        self
    }

    pub fn set_width(&mut self, width: u32) {
        self.width = width;
    }
}

impl Document for StaticDocument {
    fn contains(&self, container: ContainerHandle) -> bool {
        self.elements.iter().any(|e| e.handle == container)
    }

    fn element_by_id(&self, id: &str) -> Option<ContainerHandle> {
        self.elements.iter().find(|e| e.id.as_deref() == Some(id)).map(|e| e.handle)
    }

    fn query_selector_all(&self, selector: &str) -> Vec<ContainerHandle> {
        self.elements
            .iter()
            .filter(|e| selector_matches(selector, e.id.as_deref(), &e.classes))
            .map(|e| e.handle)
            .collect()
    }

    fn slide_count(&self, container: ContainerHandle, slide_class: &str) -> usize {
        self.elements
            .iter()
            .find(|e| e.handle == container)
            .map_or(0, |e| e.slide_classes.iter().filter(|c| *c == slide_class).count())
    }

    fn viewport_width(&self) -> u32 {
        self.width
    }
}

// --- Image directories ---

/// Class given to every directory container.
pub const DIRECTORY_CLASS: &str = "carousel";

/// Each image directory is a container, each image in it a slide.
#[derive(Debug, Clone)]
pub struct DirectoryDocument {
    directories: Vec<(String, Vec<PathBuf>)>,
    width: u32,
}

impl DirectoryDocument {
    /// Scan `dirs`; unreadable directories become empty containers.
    pub fn scan<P: AsRef<Path>>(dirs: &[P], width: u32) -> Self {
        let directories = dirs
            .iter()
            .map(|dir| {
                let dir = dir.as_ref();
                let name = dir
                    .file_name()
                    .map(|name| name.to_string_lossy().into_owned())
                    .unwrap_or_else(|| dir.display().to_string());
                let images = load_sorted_image_paths(dir).unwrap_or_else(|e| {
                    tracing::warn!("{e:#}");
                    Vec::new()
                });
                (name, images)
            })
            .collect();
        Self { directories, width }
    }

    pub fn images(&self, container: ContainerHandle) -> &[PathBuf] {
        self.directories
            .get(container.0 as usize)
            .map(|(_, images)| images.as_slice())
            .unwrap_or(&[])
    }

    pub fn set_width(&mut self, width: u32) {
        self.width = width;
    }
}

impl Document for DirectoryDocument {
    fn contains(&self, container: ContainerHandle) -> bool {
        (container.0 as usize) < self.directories.len()
    }

    fn element_by_id(&self, id: &str) -> Option<ContainerHandle> {
        self.directories
            .iter()
            .position(|(name, _)| name == id)
            .map(|index| ContainerHandle(index as u32))
    }

    fn query_selector_all(&self, selector: &str) -> Vec<ContainerHandle> {
        let classes = [DIRECTORY_CLASS.to_string()];
        self.directories
            .iter()
            .enumerate()
            .filter(|(_, (name, _))| selector_matches(selector, Some(name.as_str()), &classes))
            .map(|(index, _)| ContainerHandle(index as u32))
            .collect()
    }

    fn slide_count(&self, container: ContainerHandle, _slide_class: &str) -> usize {
        self.images(container).len()
    }

    fn viewport_width(&self) -> u32 {
        self.width
    }
}

// --- Helper: Load and Sort Image Paths ---
pub fn load_sorted_image_paths(dir_path: &Path) -> Result<Vec<PathBuf>> {
    let mut paths = Vec::new();
    let entries = fs::read_dir(dir_path)
        .with_context(|| format!("Failed to read directory {}", dir_path.display()))?;

    for entry in entries {
        let entry = entry.with_context(|| format!("Failed to read an entry of {}", dir_path.display()))?;
        let path = entry.path();
        if path.is_file() {
            if let Some(ext) = path.extension().and_then(|s| s.to_str()) {
                match ext.to_lowercase().as_str() {
                    "png" | "jpg" | "jpeg" | "bmp" | "gif" => paths.push(path),
                    _ => {}
                }
            }
        }
    }
    paths.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(paths)
}

//! Discovery of animated elements. The page declares wrappers with a
//! behavior marker attribute and tags role children underneath them; the
//! scan turns that markup into typed registry entries. Scans run at
//! startup, on resize, and on an explicit refresh, never per frame.

use crate::constants::{BEHAVIOR_ATTR, CHILD_ROLE_ATTR};
use crate::core::{derive_entry_key, Behavior, ChildRole};
use fnv::FnvHashMap;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct ChildSlot {
    pub element: web::Element,
    pub role: ChildRole,
}

pub struct Entry {
    pub element: web::Element,
    pub behavior: Behavior,
    pub children: Vec<ChildSlot>,
    pub enabled: bool,
}

/// Registered wrappers keyed by their derived label.
#[derive(Default)]
pub struct Registry {
    entries: FnvHashMap<String, Entry>,
}

impl Registry {
    /// Full-document scan. Unknown behavior tags and unknown child roles
    /// are skipped with a log line.
    pub fn scan(document: &web::Document) -> Self {
        let mut entries: FnvHashMap<String, Entry> = FnvHashMap::default();
        let wrappers = match document.query_selector_all(&format!("[{BEHAVIOR_ATTR}]")) {
            Ok(list) => list,
            Err(_) => return Self::default(),
        };
        for i in 0..wrappers.length() {
            let Some(element) = wrappers
                .item(i)
                .and_then(|n| n.dyn_into::<web::Element>().ok())
            else {
                continue;
            };
            let Some(tag) = element.get_attribute(BEHAVIOR_ATTR) else {
                continue;
            };

            let mut children = Vec::new();
            if let Ok(kids) = element.query_selector_all(&format!("[{CHILD_ROLE_ATTR}]")) {
                for j in 0..kids.length() {
                    let Some(child) =
                        kids.item(j).and_then(|n| n.dyn_into::<web::Element>().ok())
                    else {
                        continue;
                    };
                    let Some(name) = child.get_attribute(CHILD_ROLE_ATTR) else {
                        continue;
                    };
                    match ChildRole::parse(&name) {
                        Some(role) => children.push(ChildSlot {
                            element: child,
                            role,
                        }),
                        None => log::debug!("[registry] unknown child role {name:?}; skipped"),
                    }
                }
            }

            // Parameters may sit on the wrapper or on one of its role
            // children; pages commonly put the parallax speed on the
            // background child.
            let behavior = {
                let lookup = |attr: &str| {
                    element.get_attribute(attr).or_else(|| {
                        children.iter().find_map(|c| c.element.get_attribute(attr))
                    })
                };
                match Behavior::from_markup(&tag, lookup) {
                    Some(b) => b,
                    None => {
                        log::warn!("[registry] unknown behavior tag {tag:?}; skipped");
                        continue;
                    }
                }
            };

            let key = derive_entry_key(
                element.get_attribute("id").as_deref(),
                &element.class_name(),
                &random_suffix(),
            );
            let _ = entries.insert(
                key,
                Entry {
                    element,
                    behavior,
                    children,
                    enabled: true,
                },
            );
        }
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn values(&self) -> impl Iterator<Item = &Entry> {
        self.entries.values()
    }

    /// Drop entries whose wrapper is no longer attached to the document.
    pub fn retain_attached(&mut self, document: &web::Document) {
        self.entries.retain(|_, entry| {
            let node: &web::Node = entry.element.as_ref();
            document.contains(Some(node))
        });
    }

    /// Enable or disable one entry by key. Returns false when the key is
    /// not registered.
    pub fn set_enabled(&mut self, key: &str, enabled: bool) -> bool {
        match self.entries.get_mut(key) {
            Some(entry) => {
                entry.enabled = enabled;
                true
            }
            None => false,
        }
    }
}

fn random_suffix() -> String {
    format!("{:08x}", (js_sys::Math::random() * u32::MAX as f64) as u32)
}

use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Shared handle to a page element. Clones refer to the same element.
#[derive(Debug, Clone, Default)]
pub struct Element {
    state: Arc<RwLock<ElementState>>,
}

#[derive(Debug, Default)]
struct ElementState {
    value: String,
    children: Vec<String>,
}

impl Element {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(value: impl Into<String>) -> Self {
        Self {
            state: Arc::new(RwLock::new(ElementState {
                value: value.into(),
                children: Vec::new(),
            })),
        }
    }

    pub async fn value(&self) -> String {
        self.state.read().await.value.clone()
    }

    #[cfg(test)]
    pub(crate) async fn set_value(&self, value: impl Into<String>) {
        self.state.write().await.value = value.into();
    }

    /// Text of each child entry, in document order.
    pub async fn children(&self) -> Vec<String> {
        self.state.read().await.children.clone()
    }

    #[cfg(test)]
    pub(crate) async fn append_child(&self, text: impl Into<String>) {
        self.state.write().await.children.push(text.into());
    }

    /// Clears the element and appends `entries` under one write lock.
    pub async fn replace_children(&self, entries: Vec<String>) {
        let mut state = self.state.write().await;
        state.children = entries;
    }

    #[cfg(test)]
    pub(crate) fn same_element(&self, other: &Element) -> bool {
        Arc::ptr_eq(&self.state, &other.state)
    }
}

#[derive(Debug, Default)]
pub struct Document {
    elements: RwLock<HashMap<String, Element>>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `element` under `id`, replacing any previous element with that id.
    pub async fn insert(&self, id: impl Into<String>, element: Element) {
        self.elements.write().await.insert(id.into(), element);
    }

    pub async fn get_element_by_id(&self, id: &str) -> Option<Element> {
        self.elements.read().await.get(id).cloned()
    }
}

use std::time::Duration;

pub const TOAST_TTL: Duration = Duration::from_secs(4);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ToastId(pub u64);

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ToastVariant {
    #[default]
    Default,
    Destructive,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: ToastId,
    pub title: String,
    pub description: String,
    pub variant: ToastVariant,
}

/// Title, description and variant of a toast before it is queued.
#[derive(Clone, Debug, PartialEq)]
pub struct ToastSpec {
    pub title: &'static str,
    pub description: &'static str,
    pub variant: ToastVariant,
}

pub const CONNECTION_ERROR: ToastSpec = ToastSpec {
    title: "Connection Error",
    description: "Failed to connect to the assistant. Please check your internet connection.",
    variant: ToastVariant::Destructive,
};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ToastQueue {
    items: Vec<Toast>,
    next_id: u64,
}

impl ToastQueue {
    pub fn push(
        &mut self,
        title: impl Into<String>,
        description: impl Into<String>,
        variant: ToastVariant,
    ) -> ToastId {
        let id = ToastId(self.next_id);
        self.next_id += 1;
        self.items.push(Toast {
            id,
            title: title.into(),
            description: description.into(),
            variant,
        });
        id
    }

    pub fn push_spec(&mut self, spec: &ToastSpec) -> ToastId {
        self.push(spec.title, spec.description, spec.variant)
    }

    pub fn dismiss(&mut self, id: ToastId) -> bool {
        let before = self.items.len();
        self.items.retain(|toast| toast.id != id);
        self.items.len() != before
    }

    pub fn items(&self) -> &[Toast] {
        &self.items
    }
}

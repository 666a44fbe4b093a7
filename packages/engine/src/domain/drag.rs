use crate::rigid_body::BodyHandle;

/// Inertia restored when a drag ends without a usable recorded value.
pub const FALLBACK_INERTIA: f32 = 1.0;

/// The body currently held by the pointer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragSession {
    pub body: BodyHandle,
    pub original_inertia: Option<f32>,
}

impl DragSession {
    pub fn new(body: BodyHandle, original_inertia: f32) -> Self {
        Self {
            body,
            original_inertia: Some(original_inertia),
        }
    }

    /// Inertia to put back on release. A zero or missing value falls back
    /// to [`FALLBACK_INERTIA`].
    pub fn restore_inertia(&self) -> f32 {
        match self.original_inertia {
            Some(i) if i != 0.0 && !i.is_nan() => i,
            _ => FALLBACK_INERTIA,
        }
    }
}

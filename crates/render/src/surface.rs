use std::fmt;

/// Width and height in physical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct SurfaceSize {
    pub width: u32,
    pub height: u32,
}

impl SurfaceSize {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Clamp both dimensions to at least one pixel.
    pub fn at_least_one(self) -> Self {
        Self::new(self.width.max(1), self.height.max(1))
    }
}

impl fmt::Display for SurfaceSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// A render target with a displayed size and a backing resolution that can
/// drift apart, e.g. a window the user has resized.
pub trait DrawingSurface {
    /// Size the surface currently occupies on screen.
    fn display_size(&self) -> SurfaceSize;

    /// Resolution of the render target.
    fn backing_size(&self) -> SurfaceSize;

    /// Reallocate the render target at `size`.
    fn set_backing_size(&mut self, size: SurfaceSize);
}

/// Resize the backing store to match the displayed size.
///
/// Returns `true` when a resize happened, which is exactly when either
/// dimension differed.
pub fn resize_to_display_size<S: DrawingSurface + ?Sized>(surface: &mut S) -> bool {
    let shown = surface.display_size();
    let backing = surface.backing_size();
    if shown == backing {
        return false;
    }
    tracing::debug!(from = %backing, to = %shown, "resizing drawing surface");
    surface.set_backing_size(shown);
    true
}

/// In-memory surface for headless runs and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VirtualSurface {
    display: SurfaceSize,
    backing: SurfaceSize,
    resize_count: u32,
}

impl VirtualSurface {
    /// A surface whose backing store already matches its display size.
    pub fn new(size: SurfaceSize) -> Self {
        Self {
            display: size,
            backing: size,
            resize_count: 0,
        }
    }

    /// Simulate a layout change.
    pub fn set_display_size(&mut self, size: SurfaceSize) {
        self.display = size;
    }

    /// Number of times the backing store was reallocated.
    pub fn resize_count(&self) -> u32 {
        self.resize_count
    }
}

impl DrawingSurface for VirtualSurface {
    fn display_size(&self) -> SurfaceSize {
        self.display
    }

    fn backing_size(&self) -> SurfaceSize {
        self.backing
    }

    fn set_backing_size(&mut self, size: SurfaceSize) {
        self.backing = size;
        self.resize_count += 1;
    }
}

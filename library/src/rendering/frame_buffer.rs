use palette::LinSrgb;

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct FrameBufferSize {
    width: u32,
    height: u32,
}

impl FrameBufferSize {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        assert!(width > 0);
        assert!(height > 0);
        Self { width, height }
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[must_use]
    pub fn area(&self) -> u32 {
        self.width * self.height
    }

    #[must_use]
    pub fn aspect_ratio(&self) -> f32 {
        self.width as f32 / self.height as f32
    }
}

/// Caller-owned render target: a row-major grid of linear RGB pixels,
/// fully overwritten by every render pass.
pub struct FrameBuffer {
    size: FrameBufferSize,
    pixels: Vec<LinSrgb>,
}

impl FrameBuffer {
    #[must_use]
    pub fn new(size: FrameBufferSize) -> Self {
        let pixels = vec![LinSrgb::new(0.0, 0.0, 0.0); size.area() as usize];
        Self { size, pixels }
    }

    #[must_use]
    pub fn size(&self) -> FrameBufferSize {
        self.size
    }

    /// Pixel (0, 0) is the top-left corner of the image.
    #[must_use]
    pub fn pixel(&self, x: u32, y: u32) -> LinSrgb {
        assert!(x < self.size.width);
        assert!(y < self.size.height);
        self.pixels[(y * self.size.width + x) as usize]
    }

    #[must_use]
    pub fn pixels(&self) -> &[LinSrgb] {
        &self.pixels
    }

    #[must_use]
    pub(crate) fn pixels_mut(&mut self) -> &mut [LinSrgb] {
        &mut self.pixels
    }
}

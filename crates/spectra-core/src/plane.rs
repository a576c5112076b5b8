//! Single-channel 2D sample buffer.
//!
//! [`Plane`] stores `width * height` samples in row-major order. It is the
//! currency of every pipeline stage: real images, complex spectra, masks
//! and quantized outputs are all planes with different element types.
//!
//! # Example
//!
//! ```rust
//! use spectra_core::Plane;
//!
//! let mut plane = Plane::<f32>::new(4, 2);
//! plane.set(3, 1, 7.0);
//! assert_eq!(plane.get(3, 1), Some(7.0));
//! assert_eq!(plane.row(1), &[0.0, 0.0, 0.0, 7.0]);
//! ```

use crate::{Error, Result};

/// Dense single-channel image buffer.
#[derive(Debug, Clone, PartialEq)]
pub struct Plane<T> {
    width: u32,
    height: u32,
    data: Vec<T>,
}

impl<T: Clone + Default> Plane<T> {
    /// Creates a plane filled with `T::default()`.
    ///
    /// # Panics
    ///
    /// Panics if either dimension is zero. Use [`Plane::from_data`] for
    /// fallible construction from untrusted sizes.
    pub fn new(width: u32, height: u32) -> Self {
        Self::filled(width, height, T::default())
    }
}

impl<T: Clone> Plane<T> {
    /// Creates a plane with every sample set to `value`.
    ///
    /// # Panics
    ///
    /// Panics if either dimension is zero.
    pub fn filled(width: u32, height: u32, value: T) -> Self {
        assert!(width > 0 && height > 0, "plane dimensions must be non-zero");
        Self {
            width,
            height,
            data: vec![value; width as usize * height as usize],
        }
    }
}

impl<T> Plane<T> {
    /// Wraps an existing row-major buffer.
    ///
    /// Fails if a dimension is zero or `data.len() != width * height`.
    pub fn from_data(width: u32, height: u32, data: Vec<T>) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::invalid_dimensions(
                width,
                height,
                "width and height must be > 0",
            ));
        }
        let expected = (width as usize)
            .checked_mul(height as usize)
            .ok_or_else(|| Error::invalid_dimensions(width, height, "dimensions overflow"))?;
        if data.len() != expected {
            return Err(Error::invalid_dimensions(
                width,
                height,
                format!("expected {} samples, got {}", expected, data.len()),
            ));
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Plane width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Plane height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// `(width, height)`.
    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Number of samples.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Always false; planes cannot be built with zero samples.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns true if `other` has the same width and height.
    #[inline]
    pub fn same_dimensions<U>(&self, other: &Plane<U>) -> bool {
        self.dimensions() == other.dimensions()
    }

    /// Row-major samples.
    #[inline]
    pub fn data(&self) -> &[T] {
        &self.data
    }

    /// Mutable row-major samples.
    #[inline]
    pub fn data_mut(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Consumes the plane and returns its buffer.
    #[inline]
    pub fn into_data(self) -> Vec<T> {
        self.data
    }

    /// Row `y` as a slice.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    pub fn row(&self, y: u32) -> &[T] {
        let w = self.width as usize;
        let start = y as usize * w;
        &self.data[start..start + w]
    }

    /// Iterates over rows from top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[T]> {
        self.data.chunks_exact(self.width as usize)
    }

    /// Sets the sample at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if the coordinates are out of bounds.
    pub fn set(&mut self, x: u32, y: u32, value: T) {
        assert!(x < self.width && y < self.height, "({x}, {y}) out of bounds");
        let idx = y as usize * self.width as usize + x as usize;
        self.data[idx] = value;
    }

    /// Builds a new plane by applying `f` to every sample.
    pub fn map<U, F>(&self, f: F) -> Plane<U>
    where
        F: FnMut(&T) -> U,
    {
        Plane {
            width: self.width,
            height: self.height,
            data: self.data.iter().map(f).collect(),
        }
    }
}

impl<T: Copy> Plane<T> {
    /// Sample at `(x, y)`, or `None` when out of bounds.
    pub fn get(&self, x: u32, y: u32) -> Option<T> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.data[y as usize * self.width as usize + x as usize])
    }
}

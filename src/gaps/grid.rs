// src/gaps/grid.rs
/// Dense N-dimensional grid stored as one flat row-major vector.
/// Axis 0 varies slowest.
#[derive(Debug, Clone)]
pub struct Grid<T> {
    shape: Vec<usize>,
    strides: Vec<usize>,
    cells: Vec<Option<T>>,
}

impl<T> Grid<T> {
    /// All cells start empty. The caller bounds the total size.
    pub fn new(shape: Vec<usize>) -> Self {
        let mut strides = vec![1; shape.len()];
        for axis in (0..shape.len().saturating_sub(1)).rev() {
            strides[axis] = strides[axis + 1] * shape[axis + 1];
        }
        let total = shape.iter().product();
        let cells = std::iter::repeat_with(|| None).take(total).collect();

        Grid { shape, strides, cells }
    }

    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Row-major offset of `index`, or None if it is out of bounds.
    pub fn offset(&self, index: &[usize]) -> Option<usize> {
        if index.len() != self.shape.len() {
            return None;
        }
        let mut offset = 0;
        for ((&i, &size), &stride) in index.iter().zip(&self.shape).zip(&self.strides) {
            if i >= size {
                return None;
            }
            offset += i * stride;
        }
        Some(offset)
    }

    pub fn get(&self, index: &[usize]) -> Option<&T> {
        self.offset(index).and_then(|o| self.cells[o].as_ref())
    }

    /// Store `value`, returning whatever the cell held before.
    /// Out-of-bounds indexes hand the value back untouched.
    pub fn set(&mut self, index: &[usize], value: T) -> Result<Option<T>, T> {
        match self.offset(index) {
            Some(o) => Ok(self.cells[o].replace(value)),
            None => Err(value),
        }
    }

    pub fn into_flat(self) -> Vec<Option<T>> {
        self.cells
    }
}

use crate::shape::{Shape, ShapeId, ShapeType};

/// Ordered set of shapes.
///
/// Insertion order is both the paint order (later shapes on top) and the
/// hit-test scan order (earlier shapes win).
#[derive(Debug, Default)]
pub struct ShapeCollection {
    shapes: Vec<ShapeType>,
}

impl ShapeCollection {
    pub fn new() -> Self {
        Self { shapes: Vec::new() }
    }

    /// Appends a shape and returns its id
    pub fn push(&mut self, shape: ShapeType) -> ShapeId {
        let id = shape.id();
        self.shapes.push(shape);
        id
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    pub fn shapes(&self) -> &[ShapeType] {
        &self.shapes
    }

    pub fn iter(&self) -> impl Iterator<Item = &ShapeType> {
        self.shapes.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut ShapeType> {
        self.shapes.iter_mut()
    }

    pub fn get(&self, id: ShapeId) -> Option<&ShapeType> {
        self.shapes.iter().find(|shape| shape.id() == id)
    }

    pub fn get_mut(&mut self, id: ShapeId) -> Option<&mut ShapeType> {
        self.shapes.iter_mut().find(|shape| shape.id() == id)
    }

    pub fn selected(&self) -> impl Iterator<Item = &ShapeType> {
        self.shapes.iter().filter(|shape| shape.is_selected())
    }

    pub fn selected_mut(&mut self) -> impl Iterator<Item = &mut ShapeType> {
        self.shapes.iter_mut().filter(|shape| shape.is_selected())
    }

    pub fn selected_count(&self) -> usize {
        self.selected().count()
    }

    pub fn clear_selection(&mut self) {
        for shape in &mut self.shapes {
            shape.deselect();
        }
    }

    /// Removes every shape whose id is listed, returning the removed shapes
    /// in collection order
    pub fn remove_ids(&mut self, ids: &[ShapeId]) -> Vec<ShapeType> {
        let (removed, kept): (Vec<ShapeType>, Vec<ShapeType>) = std::mem::take(&mut self.shapes)
            .into_iter()
            .partition(|shape| ids.contains(&shape.id()));
        self.shapes = kept;
        removed
    }

    /// Removes all selected shapes.
    ///
    /// The ids are collected first and removed afterwards, so the scan never
    /// runs over a sequence that is being mutated.
    pub fn remove_selected(&mut self) -> Vec<ShapeType> {
        let ids: Vec<ShapeId> = self.selected().map(|shape| shape.id()).collect();
        if ids.is_empty() {
            return Vec::new();
        }
        self.remove_ids(&ids)
    }
}

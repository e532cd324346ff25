// Touch point model and identity-keyed point sets used by the pinch tracker

/// Identity token assigned to a contact by the input source (`Touch.identifier`).
pub type ContactId = i32;

/// One finger contact at its last observed position, in client coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TouchPoint {
    pub id: ContactId,
    pub x: f64,
    pub y: f64,
}

impl TouchPoint {
    pub fn new(id: ContactId, x: f64, y: f64) -> Self {
        Self { id, x, y }
    }
}

/// Euclidean distance between two contacts.
pub fn distance(a: &TouchPoint, b: &TouchPoint) -> f64 {
    ((a.x - b.x).powi(2) + (a.y - b.y).powi(2)).sqrt()
}

/// Anything that carries a contact identity and a position.
pub trait Contact {
    fn identity(&self) -> ContactId;
    fn x(&self) -> f64;
    fn y(&self) -> f64;

    fn to_point(&self) -> TouchPoint {
        TouchPoint::new(self.identity(), self.x(), self.y())
    }
}

impl Contact for TouchPoint {
    fn identity(&self) -> ContactId {
        self.id
    }
    fn x(&self) -> f64 {
        self.x
    }
    fn y(&self) -> f64 {
        self.y
    }
}

impl Contact for web_sys::Touch {
    fn identity(&self) -> ContactId {
        self.identifier()
    }
    fn x(&self) -> f64 {
        self.client_x() as f64
    }
    fn y(&self) -> f64 {
        self.client_y() as f64
    }
}

/// Order-preserving extraction, one point per contact.
pub fn extract_points<'a, C, I>(contacts: I) -> Vec<TouchPoint>
where
    C: Contact + 'a,
    I: IntoIterator<Item = &'a C>,
{
    contacts.into_iter().map(|c| c.to_point()).collect()
}

/// Reads every entry of a DOM touch list.
pub fn points_from_touch_list(list: &web_sys::TouchList) -> Vec<TouchPoint> {
    let touches: Vec<web_sys::Touch> = (0..list.length()).filter_map(|i| list.item(i)).collect();
    extract_points(&touches)
}

/// Bounded set of contacts with at most one entry per identity.
#[derive(Clone, Debug, PartialEq)]
pub struct PointSet {
    points: Vec<TouchPoint>,
    capacity: usize,
}

impl PointSet {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            points: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Replaces the content with the first `capacity` distinct contacts of `points`.
    pub fn replace(&mut self, points: &[TouchPoint]) {
        self.points.clear();
        for p in points {
            self.upsert_by_identity(*p);
        }
    }

    /// Updates the entry with the same identity in place, or appends when there is room.
    /// Returns false when the point was dropped because the set is full.
    pub fn upsert_by_identity(&mut self, point: TouchPoint) -> bool {
        if let Some(existing) = self.points.iter_mut().find(|p| p.id == point.id) {
            existing.x = point.x;
            existing.y = point.y;
            return true;
        }
        if self.points.len() >= self.capacity {
            return false;
        }
        self.points.push(point);
        true
    }

    /// Removes the entry with this identity; missing identities are a no-op.
    pub fn remove_by_identity(&mut self, id: ContactId) -> Option<TouchPoint> {
        let idx = self.points.iter().position(|p| p.id == id)?;
        Some(self.points.remove(idx))
    }

    pub fn contains(&self, id: ContactId) -> bool {
        self.points.iter().any(|p| p.id == id)
    }

    pub fn clear(&mut self) {
        self.points.clear();
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn points(&self) -> &[TouchPoint] {
        &self.points
    }

    /// Distance between the first two entries, if both exist.
    pub fn span(&self) -> Option<f64> {
        match self.points.as_slice() {
            [a, b, ..] => Some(distance(a, b)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance_symmetry_and_identity() {
        let pts = [
            TouchPoint::new(0, 0.0, 0.0),
            TouchPoint::new(1, 3.0, 4.0),
            TouchPoint::new(2, -12.5, 7.25),
            TouchPoint::new(3, 1e4, -3e3),
        ];
        for a in &pts {
            assert_eq!(distance(a, a), 0.0);
            for b in &pts {
                assert_eq!(distance(a, b), distance(b, a));
            }
        }
        assert_eq!(distance(&pts[0], &pts[1]), 5.0);
    }

    #[test]
    fn test_extract_points_preserves_order() {
        let raw = [
            TouchPoint::new(7, 1.0, 2.0),
            TouchPoint::new(3, 5.0, 6.0),
        ];
        let pts = extract_points(&raw);
        assert_eq!(pts, raw.to_vec());
    }

    #[test]
    fn test_upsert_updates_in_place() {
        let mut set = PointSet::with_capacity(2);
        assert!(set.upsert_by_identity(TouchPoint::new(1, 0.0, 0.0)));
        assert!(set.upsert_by_identity(TouchPoint::new(2, 10.0, 0.0)));
        assert!(set.upsert_by_identity(TouchPoint::new(1, 4.0, 4.0)));
        assert_eq!(set.len(), 2);
        assert_eq!(set.points()[0], TouchPoint::new(1, 4.0, 4.0));
        assert_eq!(set.points()[1], TouchPoint::new(2, 10.0, 0.0));
    }

    #[test]
    fn test_upsert_respects_capacity() {
        let mut set = PointSet::with_capacity(2);
        set.upsert_by_identity(TouchPoint::new(1, 0.0, 0.0));
        set.upsert_by_identity(TouchPoint::new(2, 0.0, 0.0));
        assert!(!set.upsert_by_identity(TouchPoint::new(3, 9.0, 9.0)));
        assert_eq!(set.len(), 2);
        assert!(!set.contains(3));
    }

    #[test]
    fn test_replace_dedupes_identity() {
        let mut set = PointSet::with_capacity(2);
        set.replace(&[
            TouchPoint::new(1, 0.0, 0.0),
            TouchPoint::new(1, 5.0, 5.0),
            TouchPoint::new(2, 1.0, 1.0),
        ]);
        assert_eq!(
            set.points(),
            &[TouchPoint::new(1, 5.0, 5.0), TouchPoint::new(2, 1.0, 1.0)]
        );
    }

    #[test]
    fn test_remove_missing_is_noop() {
        let mut set = PointSet::with_capacity(2);
        set.upsert_by_identity(TouchPoint::new(1, 0.0, 0.0));
        assert_eq!(set.remove_by_identity(9), None);
        assert_eq!(set.len(), 1);
        assert_eq!(set.remove_by_identity(1), Some(TouchPoint::new(1, 0.0, 0.0)));
        assert!(set.is_empty());
    }

    #[test]
    fn test_span_needs_two_points() {
        let mut set = PointSet::with_capacity(2);
        assert_eq!(set.span(), None);
        set.upsert_by_identity(TouchPoint::new(1, 0.0, 0.0));
        assert_eq!(set.span(), None);
        set.upsert_by_identity(TouchPoint::new(2, 0.0, 100.0));
        assert_eq!(set.span(), Some(100.0));
    }
}

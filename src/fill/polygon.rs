//! Scanline polygon fills.
//!
//! [`convex_fill`] records the leftmost and rightmost edge crossing of every
//! row in an [`EdgeTable`] and draws one span per row. [`non_convex_fill`]
//! buckets [`EdgeNode`]s by their first row in a [`NonConvexEdgeTable`] and
//! sweeps an [`ActiveEdgeList`] down the polygon, pairing sorted crossings
//! into spans (even-odd rule).
//!
//! Both tables cover only the polygon's own rows, addressed through an offset,
//! so there is no fixed canvas height to overflow. Horizontal edges never
//! produce crossings.

use std::ops::RangeInclusive;

use log::{debug, trace};

use crate::error::{Error, Result};
use crate::geometry::{polygon_edges, round_half_up, y_extent, Point, Polygon};
use crate::surface::Surface;

/// Order an edge top to bottom, `None` for horizontal edges.
fn downward(v1: Point, v2: Point) -> Option<(Point, Point)> {
    if v1.y == v2.y {
        return None;
    }
    Some(if v1.y < v2.y { (v1, v2) } else { (v2, v1) })
}

// ============================================================================
// Convex fill
// ============================================================================

/// Leftmost and rightmost crossing recorded for one row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowSpan {
    /// Leftmost crossing.
    pub xleft: i32,
    /// Rightmost crossing.
    pub xright: i32,
}

/// Per-row min/max x crossings of a convex polygon.
#[derive(Debug, Clone, PartialEq)]
pub struct EdgeTable {
    first_row: i32,
    rows: Vec<Option<RowSpan>>,
}

impl EdgeTable {
    /// Build the table for a polygon, covering rows `ceil(min y)..=floor(max y)`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DegenerateInput`] with fewer than three vertices.
    pub fn new(vertices: &[Point]) -> Result<Self> {
        Error::check_points(3, vertices.len())?;
        let (min_y, max_y) = y_extent(vertices).unwrap_or((0.0, 0.0));

        let first_row = min_y.ceil() as i32;
        let last_row = max_y.floor() as i32;
        let len = (last_row - first_row + 1).max(0) as usize;

        let mut table = Self {
            first_row,
            rows: vec![None; len],
        };
        for (v1, v2) in polygon_edges(vertices) {
            table.add_edge(v1, v2);
        }
        Ok(table)
    }

    /// Rows this table holds.
    #[must_use]
    pub fn rows(&self) -> RangeInclusive<i32> {
        self.first_row..=self.first_row + self.rows.len() as i32 - 1
    }

    /// Recorded span of `row`, `None` if outside the table or never crossed.
    #[must_use]
    pub fn span(&self, row: i32) -> Option<RowSpan> {
        let idx = usize::try_from(row - self.first_row).ok()?;
        self.rows.get(idx).copied().flatten()
    }

    /// Record a crossing at `x` on `row`, widening that row's span.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRangeRow`] if `row` is not held by the table.
    pub fn record(&mut self, row: i32, x: f64) -> Result<()> {
        let first = self.first_row;
        let last = first + self.rows.len() as i32 - 1;
        let slot = usize::try_from(row - first)
            .ok()
            .and_then(|idx| self.rows.get_mut(idx));
        let Some(slot) = slot else {
            return Err(Error::OutOfRangeRow { row, first, last });
        };

        let xi = round_half_up(x);
        *slot = Some(match *slot {
            None => RowSpan { xleft: xi, xright: xi },
            Some(s) => RowSpan {
                xleft: s.xleft.min(xi),
                xright: s.xright.max(xi),
            },
        });
        Ok(())
    }

    /// Walk one edge from its top row to its bottom row, recording `x` each row.
    fn add_edge(&mut self, v1: Point, v2: Point) {
        let Some((top, bottom)) = downward(v1, v2) else {
            return;
        };

        let inverse_slope = (bottom.x - top.x) / (bottom.y - top.y);
        let mut row = top.y.ceil() as i32;
        let mut x = top.x + (f64::from(row) - top.y) * inverse_slope;
        while f64::from(row) <= bottom.y {
            if let Err(err) = self.record(row, x) {
                debug!("skipping edge crossing: {err}");
            }
            row += 1;
            x += inverse_slope;
        }
    }

    /// Draw one span per row with `xleft <= xright`.
    pub fn fill<S: Surface>(&self, surface: &mut S, color: S::Color) {
        for (i, span) in self.rows.iter().enumerate() {
            if let Some(s) = span {
                if s.xleft <= s.xright {
                    surface.draw_span(s.xleft, s.xright, self.first_row + i as i32, color);
                }
            }
        }
    }
}

/// Fill a convex polygon with one span per row.
///
/// A concave polygon is filled as if it were its row-wise hull.
/// Fewer than three vertices draws nothing.
pub fn convex_fill<S: Surface>(surface: &mut S, vertices: &[Point], color: S::Color) {
    match EdgeTable::new(vertices) {
        Ok(table) => {
            trace!("convex fill over rows {:?}", table.rows());
            table.fill(surface, color);
        }
        Err(err) => debug!("convex fill skipped: {err}"),
    }
}

// ============================================================================
// Non-convex fill
// ============================================================================

/// Scan state of one edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EdgeNode {
    /// Crossing on the current row.
    pub x: f64,
    /// `dx/dy`, added to `x` per row.
    pub inverse_slope: f64,
    /// First row the edge no longer crosses.
    pub y_max: i32,
}

/// Edge nodes bucketed by the first row they cross.
#[derive(Debug, Clone, PartialEq)]
pub struct NonConvexEdgeTable {
    first_row: i32,
    buckets: Vec<Vec<EdgeNode>>,
}

impl NonConvexEdgeTable {
    /// Build the table for a polygon.
    ///
    /// An edge from `y1` to `y2` (`y1 < y2`) crosses rows `ceil(y1)..ceil(y2)`;
    /// edges crossing no row at all are dropped.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DegenerateInput`] with fewer than three vertices.
    pub fn new(vertices: &[Point]) -> Result<Self> {
        Error::check_points(3, vertices.len())?;
        let (min_y, max_y) = y_extent(vertices).unwrap_or((0.0, 0.0));

        let first_row = min_y.ceil() as i32;
        let len = (max_y.ceil() as i32 - first_row + 1).max(0) as usize;

        let mut table = Self {
            first_row,
            buckets: vec![Vec::new(); len],
        };
        for (v1, v2) in polygon_edges(vertices) {
            let Some((top, bottom)) = downward(v1, v2) else {
                continue;
            };

            let inverse_slope = (bottom.x - top.x) / (bottom.y - top.y);
            let row = top.y.ceil() as i32;
            let y_max = bottom.y.ceil() as i32;
            if row >= y_max {
                continue;
            }

            let node = EdgeNode {
                x: top.x + (f64::from(row) - top.y) * inverse_slope,
                inverse_slope,
                y_max,
            };
            if let Some(bucket) = table.bucket_mut(row) {
                bucket.push(node);
            }
        }
        Ok(table)
    }

    fn bucket_mut(&mut self, row: i32) -> Option<&mut Vec<EdgeNode>> {
        let idx = usize::try_from(row - self.first_row).ok()?;
        self.buckets.get_mut(idx)
    }

    /// Edges whose first crossed row is `row`.
    #[must_use]
    pub fn bucket(&self, row: i32) -> &[EdgeNode] {
        usize::try_from(row - self.first_row)
            .ok()
            .and_then(|idx| self.buckets.get(idx))
            .map_or(&[], Vec::as_slice)
    }

    /// Rows this table holds.
    #[must_use]
    pub fn rows(&self) -> RangeInclusive<i32> {
        self.first_row..=self.first_row + self.buckets.len() as i32 - 1
    }

    /// Total number of edge nodes.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.buckets.iter().map(Vec::len).sum()
    }
}

/// Edges crossing the current scanline.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ActiveEdgeList {
    nodes: Vec<EdgeNode>,
}

impl ActiveEdgeList {
    /// Create an empty list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge in edges that start on the current row.
    pub fn insert(&mut self, nodes: &[EdgeNode]) {
        self.nodes.extend_from_slice(nodes);
    }

    /// Current nodes.
    #[must_use]
    pub fn nodes(&self) -> &[EdgeNode] {
        &self.nodes
    }

    /// Number of active edges.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// True if no edge crosses the current row.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Sort by crossing and pair consecutive crossings into inclusive pixel spans
    /// `ceil(x1)..=floor(x2)`. Pairs that cover no pixel centre are skipped.
    pub fn spans(&mut self) -> Vec<(i32, i32)> {
        self.nodes.sort_by(|a, b| a.x.total_cmp(&b.x));
        self.nodes
            .chunks_exact(2)
            .map(|pair| (pair[0].x.ceil() as i32, pair[1].x.floor() as i32))
            .filter(|(x1, x2)| x1 <= x2)
            .collect()
    }

    /// Move to `next_row`: drop edges with `y_max <= next_row`, step the rest.
    pub fn advance(&mut self, next_row: i32) {
        self.nodes.retain(|n| n.y_max > next_row);
        for n in &mut self.nodes {
            n.x += n.inverse_slope;
        }
    }
}

/// Fill any simple or self-intersecting polygon with the even-odd rule.
///
/// Fewer than three vertices draws nothing.
pub fn non_convex_fill<S: Surface>(surface: &mut S, vertices: &[Point], color: S::Color) {
    let table = match NonConvexEdgeTable::new(vertices) {
        Ok(table) => table,
        Err(err) => {
            debug!("non-convex fill skipped: {err}");
            return;
        }
    };

    let mut active = ActiveEdgeList::new();
    let mut span_count = 0;
    for row in table.rows() {
        active.insert(table.bucket(row));
        for (x1, x2) in active.spans() {
            surface.draw_span(x1, x2, row, color);
            span_count += 1;
        }
        active.advance(row + 1);
    }
    trace!(
        "non-convex fill of {} edges drew {span_count} spans",
        table.edge_count()
    );
}

impl Polygon {
    /// Fill with [`convex_fill`].
    pub fn fill_convex<S: Surface>(&self, surface: &mut S, color: S::Color) {
        convex_fill(surface, self.vertices(), color);
    }

    /// Fill with [`non_convex_fill`] (even-odd rule).
    pub fn fill_non_convex<S: Surface>(&self, surface: &mut S, color: S::Color) {
        non_convex_fill(surface, self.vertices(), color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::GridPoint;
    use crate::surface::PixelRecorder;
    use std::collections::BTreeMap;

    fn poly(v: &[(f64, f64)]) -> Vec<Point> {
        v.iter().copied().map(Point::from).collect()
    }

    /// Runs of consecutive x per row.
    fn runs(rec: &PixelRecorder<u8>) -> BTreeMap<i32, Vec<(i32, i32)>> {
        let mut rows: BTreeMap<i32, Vec<(i32, i32)>> = BTreeMap::new();
        for p in rec.points() {
            let row = rows.entry(p.y).or_default();
            match row.last_mut() {
                Some(run) if run.1 + 1 == p.x => run.1 = p.x,
                _ => row.push((p.x, p.x)),
            }
        }
        rows
    }

    #[test]
    fn test_edge_table_unit_square() {
        let square = poly(&[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0)]);
        let table = EdgeTable::new(&square).unwrap();

        assert_eq!(table.rows(), 0..=10);
        for row in 0..=10 {
            assert_eq!(table.span(row), Some(RowSpan { xleft: 0, xright: 10 }), "row {row}");
        }
        assert_eq!(table.span(11), None);
        assert_eq!(table.span(-1), None);
    }

    #[test]
    fn test_convex_fill_unit_square() {
        let square = poly(&[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0)]);
        let mut rec = PixelRecorder::new(0u8);
        convex_fill(&mut rec, &square, 1);

        assert_eq!(rec.points().len(), 121);
        let rows = runs(&rec);
        assert_eq!(rows.len(), 11);
        assert!(rows.values().all(|r| r == &vec![(0, 10)]));
    }

    #[test]
    fn test_edge_table_record_out_of_range() {
        let tri = poly(&[(0.0, 2.0), (6.0, 2.0), (3.0, 8.0)]);
        let mut table = EdgeTable::new(&tri).unwrap();

        assert!(table.record(5, 1.0).is_ok());
        assert!(matches!(
            table.record(9, 1.0),
            Err(Error::OutOfRangeRow { row: 9, first: 2, last: 8 })
        ));
        assert!(matches!(table.record(1, 1.0), Err(Error::OutOfRangeRow { .. })));
    }

    #[test]
    fn test_convex_fill_triangle_one_span_per_row() {
        let tri = poly(&[(5.0, 0.0), (20.0, 18.0), (-4.0, 12.0)]);
        let mut rec = PixelRecorder::new(0u8);
        convex_fill(&mut rec, &tri, 1);

        let rows = runs(&rec);
        assert_eq!(rows.keys().copied().collect::<Vec<_>>(), (0..=18).collect::<Vec<_>>());
        for (row, r) in rows {
            assert_eq!(r.len(), 1, "row {row}");
        }
    }

    #[test]
    fn test_convex_fill_degenerate() {
        let mut rec = PixelRecorder::new(0u8);
        convex_fill(&mut rec, &poly(&[(0.0, 0.0), (5.0, 5.0)]), 1);
        assert!(rec.is_empty());
        assert!(matches!(
            EdgeTable::new(&[]),
            Err(Error::DegenerateInput { required: 3, actual: 0 })
        ));
    }

    #[test]
    fn test_non_convex_table_skips_horizontal_edges() {
        let square = poly(&[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0)]);
        let table = NonConvexEdgeTable::new(&square).unwrap();

        assert_eq!(table.edge_count(), 2);
        assert_eq!(table.bucket(0).len(), 2);
        assert!(table.bucket(0).iter().all(|n| n.y_max == 10));
        assert!(table.bucket(5).is_empty());
        assert!(table.bucket(100).is_empty());
    }

    #[test]
    fn test_active_edge_list_pairs_and_expires() {
        let mut ael = ActiveEdgeList::new();
        ael.insert(&[
            EdgeNode { x: 8.5, inverse_slope: 1.0, y_max: 3 },
            EdgeNode { x: 0.2, inverse_slope: 0.0, y_max: 5 },
            EdgeNode { x: 4.0, inverse_slope: -1.0, y_max: 5 },
            EdgeNode { x: 2.0, inverse_slope: 0.0, y_max: 2 },
        ]);

        // Sorted crossings 0.2, 2.0, 4.0, 8.5.
        assert_eq!(ael.spans(), vec![(1, 2), (4, 8)]);

        ael.advance(2);
        assert_eq!(ael.len(), 3);
        ael.advance(3);
        assert_eq!(ael.len(), 2);
        assert_eq!(ael.nodes()[1].x, 2.0);
    }

    #[test]
    fn test_non_convex_fill_u_shape() {
        let u = poly(&[
            (0.0, 0.0),
            (30.0, 0.0),
            (30.0, 30.0),
            (20.0, 30.0),
            (20.0, 10.0),
            (10.0, 10.0),
            (10.0, 30.0),
            (0.0, 30.0),
        ]);
        let mut rec = PixelRecorder::new(0u8);
        non_convex_fill(&mut rec, &u, 1);
        let rows = runs(&rec);

        // Above the notch: two crossings, one span.
        assert_eq!(rows[&5], vec![(0, 30)]);
        // Through the notch: four crossings, two spans.
        assert_eq!(rows[&20], vec![(0, 10), (20, 30)]);
        assert!(!rec.points().contains(&GridPoint::new(15, 20)));
        // Bottom edge row is not crossed.
        assert!(!rows.contains_key(&30));
    }

    #[test]
    fn test_non_convex_fill_self_intersecting() {
        // Bow tie: the two lobes meet at (10, 10).
        let bow = poly(&[(0.0, 0.0), (20.0, 20.0), (20.0, 0.0), (0.0, 20.0)]);
        let mut rec = PixelRecorder::new(0u8);
        non_convex_fill(&mut rec, &bow, 1);

        let rows = runs(&rec);
        assert_eq!(rows[&4], vec![(0, 4), (16, 20)]);
        assert!(!rec.points().contains(&GridPoint::new(10, 4)));
    }

    #[test]
    fn test_non_convex_fill_degenerate() {
        let mut rec = PixelRecorder::new(0u8);
        non_convex_fill(&mut rec, &poly(&[(0.0, 0.0), (5.0, 5.0)]), 1);
        // Collinear points cross rows but pair into zero-width spans.
        non_convex_fill(&mut rec, &poly(&[(0.5, 0.0), (0.5, 5.0), (0.5, 9.0)]), 1);
        assert!(rec.is_empty());
    }

    #[test]
    fn test_polygon_methods_match_free_functions() {
        let star = poly(&[
            (10.0, 0.0),
            (13.0, 8.0),
            (20.0, 8.0),
            (14.0, 13.0),
            (17.0, 20.0),
            (10.0, 15.0),
            (3.0, 20.0),
            (6.0, 13.0),
            (0.0, 8.0),
            (7.0, 8.0),
        ]);
        let polygon = Polygon::new(star.clone()).unwrap();

        let mut by_method = PixelRecorder::new(0u8);
        let mut by_function = PixelRecorder::new(0u8);
        polygon.fill_non_convex(&mut by_method, 1);
        non_convex_fill(&mut by_function, &star, 1);
        assert_eq!(by_method.writes(), by_function.writes());

        by_method.clear();
        by_function.clear();
        polygon.fill_convex(&mut by_method, 1);
        convex_fill(&mut by_function, &star, 1);
        assert_eq!(by_method.writes(), by_function.writes());
        assert!(!by_method.is_empty());
    }
}

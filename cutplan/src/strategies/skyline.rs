use crate::entities::{Instance, PackSolution, Sheet, SheetLayout};
use crate::geometry::primitives::Rect;
use crate::strategies::{Algorithm, Strategy, decreasing_order, oriented_fit};
use log::{debug, trace};
use ordered_float::OrderedFloat;

/// One segment of a sheet's skyline. It spans from `x` to the next segment's
/// start (or the sheet edge) at occupied height `height`.
#[derive(Clone, Copy, Debug, PartialEq)]
struct Segment {
    x: f64,
    height: f64,
}

/// Skyline: parts in descending height order. Candidate positions are the
/// skyline segment starts; a part lands on the highest segment under its
/// window, and the position minimizing `(x + w) * (base + h)` wins. No
/// rotation.
pub struct Skyline;

impl Strategy for Skyline {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Skyline
    }

    fn pack(&self, instance: &Instance) -> PackSolution {
        let sheet = instance.sheet;
        let mut sheets: Vec<SheetLayout> = vec![];
        let mut skylines: Vec<Vec<Segment>> = vec![];
        let mut unplaced = vec![];

        for part in decreasing_order(&instance.parts, |p| OrderedFloat(p.height)) {
            let (w, h) = match oriented_fit(part, sheet, false) {
                Ok(dims) => dims,
                Err(err) => {
                    debug!("[SKY] {err}");
                    unplaced.push(part.id);
                    continue;
                }
            };

            let target = skylines.iter().enumerate().find_map(|(s, sky)| {
                best_position(sky, w, h, sheet).map(|(x, base)| (s, x, base))
            });
            match target {
                Some((s, x, base)) => {
                    let placement = Rect {
                        x_min: x,
                        y_min: base,
                        x_max: x + w,
                        y_max: base + h,
                    };
                    trace!("[SKY] part {} -> sheet {s} at {placement:?}", part.id);
                    sheets[s].place(part.id, placement);
                    skylines[s] = rebuild(&skylines[s], x, x + w, base + h, sheet);
                }
                None => {
                    let mut layout = SheetLayout::default();
                    layout.place(
                        part.id,
                        Rect {
                            x_min: 0.0,
                            y_min: 0.0,
                            x_max: w,
                            y_max: h,
                        },
                    );
                    sheets.push(layout);
                    let mut sky = vec![Segment { x: 0.0, height: h }];
                    if w < sheet.width {
                        sky.push(Segment { x: w, height: 0.0 });
                    }
                    skylines.push(sky);
                }
            }
        }

        debug!(
            "[SKY] placed {} parts on {} sheets, {} unplaceable",
            instance.parts.len() - unplaced.len(),
            sheets.len(),
            unplaced.len()
        );
        PackSolution::build(self.algorithm(), sheets, unplaced, instance)
    }
}

/// Slides a window of width `w` across the skyline, anchored at each segment
/// start. The placement base is the maximum segment height under the window.
/// Returns the `(x, base)` with the least waste score; the earliest candidate
/// wins ties.
fn best_position(sky: &[Segment], w: f64, h: f64, sheet: Sheet) -> Option<(f64, f64)> {
    let mut best: Option<(f64, f64, f64)> = None;
    for (j, seg) in sky.iter().enumerate() {
        let x = seg.x;
        if x + w > sheet.width {
            continue;
        }
        let mut base = seg.height;
        for other in &sky[j + 1..] {
            if other.x >= x + w {
                break;
            }
            base = base.max(other.height);
        }
        if base + h > sheet.height {
            continue;
        }
        let waste = (x + w) * (base + h);
        if best.is_none_or(|(.., b)| waste < b) {
            best = Some((x, base, waste));
        }
    }
    best.map(|(x, base, _)| (x, base))
}

/// Skyline after placing a part spanning `[left, right)` with its top at
/// `top`: segments left of the placement are kept verbatim (a straddler is
/// implicitly truncated by the new segment), the covered span becomes one
/// segment at `top`, and everything beyond `right` keeps its prior height.
fn rebuild(sky: &[Segment], left: f64, right: f64, top: f64, sheet: Sheet) -> Vec<Segment> {
    let mut out = Vec::with_capacity(sky.len() + 2);
    for seg in sky {
        if seg.x < left {
            out.push(*seg);
        }
    }
    out.push(Segment {
        x: left,
        height: top,
    });
    for (i, seg) in sky.iter().enumerate() {
        let end = sky.get(i + 1).map_or(sheet.width, |next| next.x);
        if seg.x >= right {
            out.push(*seg);
        } else if end > right {
            // clipped remainder of the segment straddling the right edge
            out.push(Segment {
                x: right,
                height: seg.height,
            });
        }
    }
    out
}

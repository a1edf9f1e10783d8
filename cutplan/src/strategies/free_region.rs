use crate::entities::Sheet;
use crate::geometry::primitives::Rect;

/// The unused area of a single sheet, tracked as a list of free rectangles.
/// Owned exclusively by the strategy that created it; never shared across
/// sheets or across strategies.
#[derive(Clone, Debug)]
pub(crate) struct FreeRegions {
    regions: Vec<Rect>,
}

impl FreeRegions {
    /// A fresh sheet: one free region spanning the whole sheet.
    pub fn whole_sheet(sheet: Sheet) -> Self {
        FreeRegions {
            regions: vec![sheet.bounds()],
        }
    }

    /// Index of the first region a `w x h` part fits into, in list order.
    pub fn first_fit(&self, w: f64, h: f64) -> Option<usize> {
        self.regions
            .iter()
            .position(|r| w <= r.width() && h <= r.height())
    }

    /// Index of the fitting region with the least leftover area
    /// (`region.area - w * h`), along with that leftover.
    /// The earliest region wins ties.
    pub fn best_fit(&self, w: f64, h: f64) -> Option<(usize, f64)> {
        let mut best: Option<(usize, f64)> = None;
        for (idx, r) in self.regions.iter().enumerate() {
            if w <= r.width() && h <= r.height() {
                let leftover = r.area() - w * h;
                if best.is_none_or(|(_, b)| leftover < b) {
                    best = Some((idx, leftover));
                }
            }
        }
        best
    }

    /// Places a `w x h` part in the bottom-left corner of region `idx` and
    /// splits the remainder into a right strip (`remW x h`) and a full-width
    /// bottom piece (`region.width x remH`), appended in that order.
    /// Returns the placement rectangle.
    pub fn split_fill(&mut self, idx: usize, w: f64, h: f64) -> Rect {
        let region = self.regions.remove(idx);
        let rem_w = region.width() - w;
        let rem_h = region.height() - h;
        let placement = place_in_corner(region, w, h, rem_w, rem_h);

        if rem_w > 0.0 {
            self.regions.push(Rect {
                x_min: placement.x_max,
                y_min: region.y_min,
                x_max: region.x_max,
                y_max: placement.y_max,
            });
        }
        if rem_h > 0.0 {
            self.regions.push(Rect {
                x_min: region.x_min,
                y_min: placement.y_max,
                x_max: region.x_max,
                y_max: region.y_max,
            });
        }
        placement
    }

    /// Places a `w x h` part in the bottom-left corner of region `idx` and
    /// splits with a single guillotine cut: the larger leftover dimension
    /// becomes the large remaining rectangle, the smaller becomes a strip.
    pub fn split_guillotine(&mut self, idx: usize, w: f64, h: f64) -> Rect {
        let region = self.regions.remove(idx);
        let rem_w = region.width() - w;
        let rem_h = region.height() - h;
        let placement = place_in_corner(region, w, h, rem_w, rem_h);

        if rem_w >= rem_h {
            // full-height right piece, bottom strip under the part
            if rem_w > 0.0 {
                self.regions.push(Rect {
                    x_min: placement.x_max,
                    y_min: region.y_min,
                    x_max: region.x_max,
                    y_max: region.y_max,
                });
            }
            if rem_h > 0.0 {
                self.regions.push(Rect {
                    x_min: region.x_min,
                    y_min: placement.y_max,
                    x_max: placement.x_max,
                    y_max: region.y_max,
                });
            }
        } else {
            // full-width bottom piece, right strip beside the part
            if rem_h > 0.0 {
                self.regions.push(Rect {
                    x_min: region.x_min,
                    y_min: placement.y_max,
                    x_max: region.x_max,
                    y_max: region.y_max,
                });
            }
            if rem_w > 0.0 {
                self.regions.push(Rect {
                    x_min: placement.x_max,
                    y_min: region.y_min,
                    x_max: region.x_max,
                    y_max: placement.y_max,
                });
            }
        }
        placement
    }
}

/// Placement rectangle for a `w x h` part in the bottom-left corner of
/// `region`. A side with no remainder snaps to the region edge, so an ulp of
/// rounding in `x_min + w` can never push a placement past the sheet bound.
fn place_in_corner(region: Rect, w: f64, h: f64, rem_w: f64, rem_h: f64) -> Rect {
    Rect {
        x_min: region.x_min,
        y_min: region.y_min,
        x_max: if rem_w > 0.0 {
            region.x_min + w
        } else {
            region.x_max
        },
        y_max: if rem_h > 0.0 {
            region.y_min + h
        } else {
            region.y_max
        },
    }
}

//! Region clustering: group a page's text boxes into visual regions (§4.3).
//!
//! DBSCAN with `min_samples = 1` reduces to transitive closure under the
//! "distance <= eps" relation, so rather than pull in a generic clustering
//! dependency this is a union-find over the O(n^2) rectangle-distance matrix.

use crate::config::PipelineConfig;
use crate::geometry::{clamp, encompassing_box, rectangle_distance, relaxed_same_line, BBox};
use std::collections::BTreeMap;

/// A cluster of text boxes sharing a page, plus their encompassing box.
#[derive(Debug, Clone, PartialEq)]
pub struct Region {
    pub bbox: BBox,
    pub boxes: Vec<BBox>,
}

struct UnionFind {
    parent: Vec<usize>,
}

impl UnionFind {
    fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
        }
    }

    fn find(&mut self, x: usize) -> usize {
        if self.parent[x] != x {
            self.parent[x] = self.find(self.parent[x]);
        }
        self.parent[x]
    }

    fn union(&mut self, a: usize, b: usize) {
        let ra = self.find(a);
        let rb = self.find(b);
        if ra != rb {
            self.parent[ra] = rb;
        }
    }
}

/// Estimate the adaptive clustering ε for a page's text boxes (§4.3).
///
/// For each box, finds the minimum rectangle distance to every box that is
/// not on the same line under the relaxed predicate; the resulting
/// distribution's mode (if common enough) or median drives ε, clamped into
/// `[epsilon_min, epsilon_max]`.
pub fn estimate_epsilon(boxes: &[BBox], config: &PipelineConfig) -> f32 {
    let mut nearest_inter_line: Vec<f32> = Vec::new();

    for &b1 in boxes {
        let mut min_dist: Option<f32> = None;
        for &b2 in boxes {
            if relaxed_same_line(b1, b2) {
                continue;
            }
            let d = rectangle_distance(b1, b2);
            min_dist = Some(match min_dist {
                Some(cur) if cur <= d => cur,
                _ => d,
            });
        }
        if let Some(d) = min_dist {
            nearest_inter_line.push(d);
        }
    }

    if nearest_inter_line.is_empty() {
        return 1.0;
    }

    nearest_inter_line.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    // Round to the nearest integer before mode-finding: exact float ties are
    // rare, but line gaps cluster tightly enough that rounding recovers a
    // meaningful mode. Ties in frequency resolve to the smallest value,
    // matching `scipy.stats.mode`'s tie-breaking.
    let mut frequency: BTreeMap<i64, usize> = BTreeMap::new();
    for &d in &nearest_inter_line {
        *frequency.entry(d.round() as i64).or_insert(0) += 1;
    }
    let mut mode_value = 0i64;
    let mut mode_count = 0usize;
    for (&value, &count) in &frequency {
        if count > mode_count {
            mode_count = count;
            mode_value = value;
        }
    }

    let eps = if mode_count >= config.epsilon_mode_frequency_threshold {
        1.5 * mode_value as f32
    } else {
        let mid = nearest_inter_line.len() / 2;
        1.2 * nearest_inter_line[mid]
    };

    clamp(eps, config.epsilon_min, config.epsilon_max)
}

/// Cluster a page's (already deduplicated, reading-order-sorted) text boxes
/// into regions.
///
/// Above `config.clustering_threshold` boxes, clustering is skipped and the
/// whole page becomes one region (ε = 1 is used only for the diagnostic
/// log line, never for an actual merge decision).
///
/// Regions are returned in DBSCAN label-discovery order: the order in which
/// each cluster's first member appears in `boxes`. Within a region, boxes
/// keep their original reading-order position.
pub fn cluster_into_regions(boxes: &[BBox], config: &PipelineConfig) -> Vec<Region> {
    if boxes.is_empty() {
        return Vec::new();
    }

    if boxes.len() > config.clustering_threshold {
        log::debug!(
            "page has {} text boxes (> {}); skipping clustering, eps=1 for diagnostics",
            boxes.len(),
            config.clustering_threshold
        );
        let bbox = encompassing_box(boxes).expect("boxes is non-empty");
        return vec![Region {
            bbox,
            boxes: boxes.to_vec(),
        }];
    }

    let eps = estimate_epsilon(boxes, config);
    log::debug!("page has {} text boxes; eps={}", boxes.len(), eps);

    let n = boxes.len();
    let mut uf = UnionFind::new(n);
    for i in 0..n {
        for j in (i + 1)..n {
            if rectangle_distance(boxes[i], boxes[j]) <= eps {
                uf.union(i, j);
            }
        }
    }

    let mut label_order: Vec<usize> = Vec::new();
    let mut members: BTreeMap<usize, Vec<usize>> = BTreeMap::new();
    for i in 0..n {
        let root = uf.find(i);
        if !members.contains_key(&root) {
            label_order.push(root);
        }
        members.entry(root).or_default().push(i);
    }

    label_order
        .into_iter()
        .map(|root| {
            let indices = &members[&root];
            let region_boxes: Vec<BBox> = indices.iter().map(|&i| boxes[i]).collect();
            let bbox = encompassing_box(&region_boxes).expect("region is non-empty");
            Region {
                bbox,
                boxes: region_boxes,
            }
        })
        .collect()
}

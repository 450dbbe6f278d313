use rapier3d::{
    na::{Point3, Vector3},
    parry::{
        bounding_volume::Aabb,
        partitioning::{Bvh, BvhBuildStrategy},
    },
};

use super::{
    settings::BROAD_PHASE_MARGIN,
    types::{Faces, Volume},
};

/// Immutable, ordered set of static volumes with a broad-phase accelerator.
///
/// Notes:
/// - The order of `volumes` is the level's authoring order. Resolvers that pick
///   "the first match" rely on it, so candidate queries always return indices in
///   ascending order.
/// - The BVH only prunes. Exact face predicates in `narrow_phase` decide contact.
pub struct StaticSet {
    volumes: Vec<Volume>,
    bvh: Bvh,
}

impl StaticSet {
    pub fn new(volumes: Vec<Volume>) -> Self {
        let aabbs: Vec<Aabb> = volumes.iter().map(|v| faces_aabb(v.faces())).collect();

        Self {
            bvh: Bvh::from_leaves(BvhBuildStrategy::Binned, &aabbs),
            volumes,
        }
    }

    #[inline]
    pub fn volumes(&self) -> &[Volume] {
        &self.volumes
    }

    #[inline]
    pub fn get(&self, idx: usize) -> Option<&Volume> {
        self.volumes.get(idx)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.volumes.is_empty()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.volumes.len()
    }

    /// Indices of volumes whose AABB intersects `region`, in set order.
    pub fn query_candidates(&self, region: &Aabb) -> Vec<usize> {
        let mut hits: Vec<usize> = self
            .bvh
            .intersect_aabb(region)
            .map(|leaf_idx| leaf_idx as usize)
            .collect();
        hits.sort_unstable();
        hits.dedup();
        hits
    }

    /// Candidates that could touch a box with `faces`, with the query region
    /// extended `below` world units downward (for ground probes).
    pub fn candidates_around(&self, faces: &Faces, below: f32) -> Vec<usize> {
        let mut region = faces_aabb(faces);
        region.mins.y -= below.max(0.0);
        self.query_candidates(&aabb_inflate(&region, BROAD_PHASE_MARGIN))
    }
}

impl std::fmt::Debug for StaticSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StaticSet")
            .field("volumes", &self.volumes)
            .finish_non_exhaustive()
    }
}

/// World-space AABB spanning a set of faces.
pub fn faces_aabb(faces: &Faces) -> Aabb {
    Aabb::new(
        Point3::new(faces.left, faces.bottom, faces.back),
        Point3::new(faces.right, faces.top, faces.front),
    )
}

/// Inflate an AABB by `margin` on all sides.
fn aabb_inflate(a: &Aabb, margin: f32) -> Aabb {
    if margin <= 0.0 {
        return *a;
    }
    let delta = Vector3::new(margin, margin, margin);
    Aabb {
        mins: a.mins - delta,
        maxs: a.maxs + delta,
    }
}

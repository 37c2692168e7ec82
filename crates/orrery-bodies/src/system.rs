//! Arena-backed celestial tree.

use glam::DVec3;

use crate::{
    AttachError, BodyAttributes, BodyError, BodyId, BodyKind, CelestialBody, generate_self_id,
};

/// Display label of the synthetic root.
pub const ROOT_NAME: &str = "center of universe";

/// A single-rooted tree of celestial bodies.
///
/// Bodies are created detached with [`create`](Self::create) and linked into
/// the tree with [`add_descendant`](Self::add_descendant). There is no removal.
#[derive(Clone, Debug)]
pub struct CelestialSystem {
    bodies: Vec<CelestialBody>,
}

impl Default for CelestialSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl CelestialSystem {
    /// A system holding only the synthetic root.
    pub fn new() -> Self {
        let root = CelestialBody::new(
            BodyId::ROOT,
            BodyKind::Root,
            generate_self_id(BodyKind::Root),
            BodyAttributes::named(ROOT_NAME),
        );
        Self { bodies: vec![root] }
    }

    pub fn root(&self) -> BodyId {
        BodyId::ROOT
    }

    /// Number of bodies, including the root and detached bodies.
    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    /// Always false: the root exists from construction.
    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    pub fn get(&self, id: BodyId) -> Option<&CelestialBody> {
        self.bodies.get(id.0)
    }

    pub fn get_mut(&mut self, id: BodyId) -> Option<&mut CelestialBody> {
        self.bodies.get_mut(id.0)
    }

    /// First body with the given display name, in arena order.
    pub fn find_by_name(&self, name: &str) -> Option<BodyId> {
        self.bodies.iter().find(|b| b.name == name).map(|b| b.id)
    }

    /// Construct a detached body.
    ///
    /// Fails when the attributes do not validate or name an unknown orbit
    /// parent. The new body is not part of the tree until attached.
    pub fn create(&mut self, kind: BodyKind, attrs: BodyAttributes) -> Result<BodyId, BodyError> {
        if kind == BodyKind::Root {
            return Err(BodyError::DuplicateRoot);
        }
        attrs.validate()?;
        if let Some(around) = attrs.revolution.around
            && self.get(around).is_none()
        {
            return Err(BodyError::UnknownBody(around));
        }

        let id = BodyId(self.bodies.len());
        let body = CelestialBody::new(id, kind, generate_self_id(kind), attrs);
        log::debug!("created {} {:?} as {}", kind, body.name, body.self_id);
        self.bodies.push(body);
        Ok(id)
    }

    /// Attach `child` as the last descendant of `parent`.
    ///
    /// The parent's kind decides which child kinds are accepted. On any error
    /// the tree is left unchanged.
    pub fn add_descendant(&mut self, parent: BodyId, child: BodyId) -> Result<(), AttachError> {
        let parent_body = self.get(parent).ok_or(AttachError::UnknownBody(parent))?;
        let child_body = self.get(child).ok_or(AttachError::UnknownBody(child))?;
        let (parent_kind, child_kind) = (parent_body.kind, child_body.kind);

        if !parent_kind.accepts(child_kind) {
            if parent_kind == BodyKind::Moon {
                log::warn!(
                    "cannot add descendant to {}: moons cannot have descendants",
                    parent_body.self_id
                );
            } else {
                log::debug!(
                    "{} rejected {} {}",
                    parent_body.self_id,
                    child_kind,
                    child_body.self_id
                );
            }
            return Err(AttachError::Rejected {
                parent: parent_kind,
                child: child_kind,
            });
        }
        if child_body.is_attached() {
            return Err(AttachError::AlreadyAttached(child));
        }
        if let Some(around) = child_body.revolution.around
            && around != parent
            && !self.ancestors_of(parent).any(|a| a == around)
        {
            return Err(AttachError::OrbitNotAncestor { child, around });
        }

        let parent_self_id = parent_body.self_id.clone();

        let child_body = &mut self.bodies[child.0];
        child_body.parent = Some(parent);
        child_body.parent_id = Some(parent_self_id);
        self.bodies[parent.0].descendants.push(child);

        self.recompose(child);
        Ok(())
    }

    /// Recompute absolute positions below (and including) `id` from
    /// orbit-local positions. Unknown ids are ignored.
    pub(crate) fn recompose(&mut self, id: BodyId) {
        let Some(body) = self.get(id) else {
            return;
        };
        let parent_absolute = body
            .parent
            .and_then(|p| self.get(p))
            .map_or(DVec3::ZERO, |p| p.absolute_position);
        let mut stack = vec![(id, parent_absolute)];
        while let Some((current, base)) = stack.pop() {
            let body = &mut self.bodies[current.0];
            body.absolute_position = body.position + base;
            let absolute = body.absolute_position;
            stack.extend(body.descendants.iter().rev().map(|d| (*d, absolute)));
        }
    }

    /// Parent chain of `id`, nearest first, ending at the root.
    pub fn ancestors_of(&self, id: BodyId) -> impl Iterator<Item = BodyId> + '_ {
        std::iter::successors(self.get(id).and_then(|b| b.parent), move |p| {
            self.get(*p).and_then(|b| b.parent)
        })
    }

    /// Number of edges between `id` and the root, or `None` when detached.
    pub fn depth_of(&self, id: BodyId) -> Option<usize> {
        if id == BodyId::ROOT {
            return Some(0);
        }
        let mut depth = 0;
        for ancestor in self.ancestors_of(id) {
            depth += 1;
            if ancestor == BodyId::ROOT {
                return Some(depth);
            }
        }
        None
    }

    /// Height of the subtree below `id` (0 for a leaf).
    pub fn height_of(&self, id: BodyId) -> usize {
        self.iter_from(id).map(|(depth, _)| depth).max().unwrap_or(0)
    }

    /// Pre-order walk of the tree from the root.
    pub fn iter(&self) -> PreOrder<'_> {
        self.iter_from(BodyId::ROOT)
    }

    /// Pre-order walk of the subtree rooted at `id`. Depths are relative to `id`.
    pub fn iter_from(&self, id: BodyId) -> PreOrder<'_> {
        let stack = if self.get(id).is_some() {
            vec![(0, id)]
        } else {
            Vec::new()
        };
        PreOrder {
            system: self,
            stack,
        }
    }

    /// Visit every attached body, parent before descendants and descendants in
    /// insertion order. `visit` receives the depth below the root.
    pub fn traverse(&self, mut visit: impl FnMut(usize, &CelestialBody)) {
        for (depth, body) in self.iter() {
            visit(depth, body);
        }
    }

    /// Pre-order list of handles, for callers that need to mutate while walking.
    pub fn preorder_ids(&self) -> Vec<BodyId> {
        self.iter().map(|(_, b)| b.id).collect()
    }

    /// All bodies in the tree below `id`, pre-order, excluding `id` itself.
    pub fn descendants_of(&self, id: BodyId) -> Vec<BodyId> {
        self.iter_from(id).skip(1).map(|(_, b)| b.id).collect()
    }
}

/// Explicit-stack pre-order iterator over a [`CelestialSystem`].
pub struct PreOrder<'a> {
    system: &'a CelestialSystem,
    stack: Vec<(usize, BodyId)>,
}

impl<'a> Iterator for PreOrder<'a> {
    type Item = (usize, &'a CelestialBody);

    fn next(&mut self) -> Option<Self::Item> {
        let (depth, id) = self.stack.pop()?;
        let system = self.system;
        let body = &system.bodies[id.0];
        // Reverse push so the first descendant is popped first.
        self.stack
            .extend(body.descendants.iter().rev().map(|d| (depth + 1, *d)));
        Some((depth, body))
    }
}

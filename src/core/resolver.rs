//! Dependency resolution
//!
//! Computes the install order for one or more ports. The dependency graph is
//! never materialized: each node's declared dependencies are read lazily
//! from a [`DependencySource`] while the traversal runs.

use std::collections::{HashMap, HashSet};

use crate::error::ResolverError;

/// Something that knows the declared dependencies of a target
pub trait DependencySource {
    /// Declared dependencies of `id`, in declaration order
    fn declared_dependencies(&self, id: &str) -> Vec<String>;
}

impl DependencySource for HashMap<String, Vec<String>> {
    fn declared_dependencies(&self, id: &str) -> Vec<String> {
        self.get(id).cloned().unwrap_or_default()
    }
}

/// Resolve an install order for `targets`
///
/// Every dependency comes before every target that declares it, no
/// identifier appears twice, and targets are processed left to right so a
/// dependency satisfied by an earlier target is not visited again.
pub fn resolve_install_order<S, T>(source: &S, targets: &[T]) -> Result<Vec<String>, ResolverError>
where
    S: DependencySource + ?Sized,
    T: AsRef<str>,
{
    let mut resolver = Resolver {
        source,
        resolved: Vec::new(),
        done: HashSet::new(),
        path: Vec::new(),
    };

    for target in targets {
        resolver.visit(target.as_ref())?;
    }

    Ok(resolver.resolved)
}

struct Resolver<'a, S: ?Sized> {
    source: &'a S,
    resolved: Vec<String>,
    done: HashSet<String>,
    /// Targets currently being resolved, outermost first
    path: Vec<String>,
}

impl<S: DependencySource + ?Sized> Resolver<'_, S> {
    fn visit(&mut self, id: &str) -> Result<(), ResolverError> {
        if self.done.contains(id) {
            return Ok(());
        }

        if let Some(start) = self.path.iter().position(|p| p == id) {
            let mut cycle = self.path[start..].to_vec();
            cycle.push(id.to_string());
            return Err(ResolverError::CircularDependency { cycle });
        }

        self.path.push(id.to_string());
        for dep in self.source.declared_dependencies(id) {
            if !self.done.contains(&dep) {
                tracing::debug!("{id} depends on {dep}");
                self.visit(&dep)?;
            }
        }
        self.path.pop();

        self.done.insert(id.to_string());
        self.resolved.push(id.to_string());
        Ok(())
    }
}

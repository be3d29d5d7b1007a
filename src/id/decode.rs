//! Identifier decoding: URN check, type lookup, arity-dependent field
//! assignment, and source/target colour-space derivation.

use crate::id::types::{ACES_2065_1, ACES_URN, ID_SEPARATOR, OCES, TransformType, URN_SEPARATOR};
use serde::Serialize;
use thiserror::Error;

/// Decoded structured form of a transform identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TransformId {
    pub urn: String,
    #[serde(rename = "type")]
    pub ty: TransformType,
    pub namespace: Option<String>,
    pub name: Option<String>,
    /// Version components are opaque strings, not necessarily numeric.
    pub major: String,
    pub minor: String,
    /// Absent only in the legacy four-component IDT form.
    pub patch: Option<String>,
    pub source: Option<String>,
    pub target: Option<String>,
}

/// Structural violations in an identifier string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MalformedId {
    /// The part before the last `:` is not the canonical URN.
    #[error("invalid URN {urn:?} in {id:?}")]
    Urn { id: String, urn: String },

    /// The first component is not a known transform type.
    #[error("unknown transform type {ty:?} in {id:?}")]
    Type { id: String, ty: String },

    /// The trailing components fit no arity of the grammar.
    #[error("{id:?} has {len} components after the type, expected 3, 4 or 5")]
    Arity { id: String, len: usize },

    /// Four trailing components are only valid for ACESlib, ACESutil and IDT.
    #[error("{ty} identifier {id:?} cannot take four components")]
    TypeArity { id: String, ty: TransformType },
}

/// Decode a canonical (already patched) identifier string.
pub fn decode(id: &str) -> Result<TransformId, MalformedId> {
    let (urn, rest) = id.rsplit_once(URN_SEPARATOR).unwrap_or(("", id));
    if urn != ACES_URN {
        return Err(MalformedId::Urn {
            id: id.to_string(),
            urn: urn.to_string(),
        });
    }

    let mut components = rest.split(ID_SEPARATOR);
    let ty_str = components.next().unwrap_or_default();
    let ty = TransformType::from_canonical(ty_str).ok_or_else(|| MalformedId::Type {
        id: id.to_string(),
        ty: ty_str.to_string(),
    })?;
    let tail: Vec<&str> = components.collect();

    // Field assignment by tail arity. The four-component forms are legacy:
    // ACESlib/ACESutil never carried a namespace, and early IDTs put the
    // name before the namespace and dropped the patch component.
    let (namespace, name, major, minor, patch) = match (tail.len(), ty) {
        (3, _) => (None, None, tail[0], tail[1], Some(tail[2])),
        (4, TransformType::AcesLib | TransformType::AcesUtil) => {
            (None, Some(tail[0]), tail[1], tail[2], Some(tail[3]))
        }
        (4, TransformType::Idt) => (Some(tail[1]), Some(tail[0]), tail[2], tail[3], None),
        (4, _) => {
            return Err(MalformedId::TypeArity {
                id: id.to_string(),
                ty,
            });
        }
        (5, _) => (Some(tail[0]), Some(tail[1]), tail[2], tail[3], Some(tail[4])),
        (len, _) => {
            return Err(MalformedId::Arity {
                id: id.to_string(),
                len,
            });
        }
    };

    let (source, target) = derive_endpoints(ty, name);

    Ok(TransformId {
        urn: urn.to_string(),
        ty,
        namespace: namespace.map(str::to_string),
        name: name.map(str::to_string),
        major: major.to_string(),
        minor: minor.to_string(),
        patch: patch.map(str::to_string),
        source,
        target,
    })
}

/// Derive the colour-space endpoints from the type and name.
///
/// A `_to_` token inside the name wins over the per-type defaults;
/// combinations outside the table leave both endpoints unset.
fn derive_endpoints(ty: TransformType, name: Option<&str>) -> (Option<String>, Option<String>) {
    use TransformType::*;

    let endpoints = match name {
        Some(name) => {
            if let Some((source, target)) = name.split_once("_to_") {
                (source, target)
            } else {
                match ty {
                    Idt | Lmt => (name, ACES_2065_1),
                    Odt => (OCES, name),
                    InvOdt => (name, OCES),
                    RrtOdt => (ACES_2065_1, name),
                    InvRrtOdt => (name, ACES_2065_1),
                    _ => return (None, None),
                }
            }
        }
        None => match ty {
            Rrt => (ACES_2065_1, OCES),
            InvRrt => (OCES, ACES_2065_1),
            _ => return (None, None),
        },
    };

    (
        Some(endpoints.0.to_string()),
        Some(endpoints.1.to_string()),
    )
}

impl TransformId {
    /// Reassemble the canonical identifier string from the decoded fields.
    pub fn canonical(&self) -> String {
        let mut tail: Vec<&str> = Vec::new();
        match (self.namespace.as_deref(), self.name.as_deref()) {
            // Legacy IDT ordering: name before namespace.
            (Some(namespace), Some(name)) if self.patch.is_none() => {
                tail.push(name);
                tail.push(namespace);
            }
            (namespace, name) => {
                tail.extend(namespace);
                tail.extend(name);
            }
        }
        tail.push(&self.major);
        tail.push(&self.minor);
        tail.extend(self.patch.as_deref());

        format!(
            "{}{}{}{}{}",
            self.urn,
            URN_SEPARATOR,
            self.ty,
            ID_SEPARATOR,
            tail.join(ID_SEPARATOR)
        )
    }
}

//! Read back the parameters a reduced-order engine needs from an MJCF file.
//!
//! This is not a general MJCF parser.  It walks the document once with
//! `quick_xml::Reader` and records:
//!
//! - `<option timestep gravity>` and `<compiler angle>`
//! - every `<material name rgba>`
//! - the first body directly under `<worldbody>` (the root), its spawn
//!   position, whether it has a free joint, and explicit geom masses
//! - hinge joints (name, damping, range) and the capsule legs hanging from
//!   the body each hinge belongs to
//! - `<motor joint gear ctrlrange>`
//!
//! `<include file>` is followed relative to the including file.  Each file
//! may be included at most once.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

use hop_core::Rgba;

use crate::{SceneError, SceneResult};

/// MuJoCo's default timestep when `<option timestep>` is absent.
const DEFAULT_TIMESTEP: f64 = 0.002;

// ── Records ───────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct MaterialDef {
    pub name: String,
    pub rgba: Rgba,
}

#[derive(Clone, Debug, PartialEq, Default)]
pub struct RootBody {
    pub name:       Option<String>,
    pub pos:        [f64; 3],
    pub free_joint: bool,
    /// Sum of explicit `mass` attributes on the root's own geoms.
    pub geom_mass:  f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct HingeDef {
    pub name:    String,
    pub damping: f64,
    /// Joint limits in radians, if the joint declares a range.
    pub range:   Option<(f64, f64)>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct LegDef {
    /// Hinge of the body the capsule is attached to.
    pub joint:  Option<String>,
    pub length: f64,
    pub radius: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct MotorDef {
    pub joint:     String,
    pub gear:      f64,
    pub ctrlrange: Option<(f64, f64)>,
}

// ── SceneSummary ──────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct SceneSummary {
    pub timestep:  f64,
    pub gravity:   [f64; 3],
    pub materials: Vec<MaterialDef>,
    pub root:      Option<RootBody>,
    pub hinges:    Vec<HingeDef>,
    pub legs:      Vec<LegDef>,
    pub motors:    Vec<MotorDef>,
    /// `false` once `<compiler angle="radian">` is seen.
    angle_in_degrees: bool,
}

impl SceneSummary {
    /// Summarize the scene at `path`, following includes.
    pub fn from_path(path: &Path) -> SceneResult<Self> {
        if !path.exists() {
            return Err(SceneError::NotFound(path.to_path_buf()));
        }
        let xml = std::fs::read_to_string(path)?;
        let base = path.parent().unwrap_or(Path::new("."));

        let mut seen = HashSet::new();
        if let Ok(canonical) = path.canonicalize() {
            seen.insert(canonical);
        }

        let mut summary = Self::empty();
        summary.collect(&xml, Some(base), &mut seen)?;
        summary.finish();
        Ok(summary)
    }

    /// Summarize an in-memory document.  `<include>` is an error here
    /// because there is no directory to resolve it against.
    pub fn parse(xml: &str) -> SceneResult<Self> {
        let mut summary = Self::empty();
        summary.collect(xml, None, &mut HashSet::new())?;
        summary.finish();
        Ok(summary)
    }

    pub fn material(&self, name: &str) -> Option<&MaterialDef> {
        self.materials.iter().find(|m| m.name == name)
    }

    pub fn hinge(&self, name: &str) -> Option<&HingeDef> {
        self.hinges.iter().find(|h| h.name == name)
    }

    /// The capsule leg driven by `joint`, if any.
    pub fn leg_for(&self, joint: &str) -> Option<&LegDef> {
        self.legs.iter().find(|l| l.joint.as_deref() == Some(joint))
    }

    fn empty() -> Self {
        Self {
            timestep:         DEFAULT_TIMESTEP,
            gravity:          [0.0, 0.0, -9.81],
            materials:        Vec::new(),
            root:             None,
            hinges:           Vec::new(),
            legs:             Vec::new(),
            motors:           Vec::new(),
            angle_in_degrees: true,
        }
    }

    /// Convert joint ranges once the angle unit is known.
    fn finish(&mut self) {
        if self.angle_in_degrees {
            for hinge in &mut self.hinges {
                if let Some((lo, hi)) = hinge.range {
                    hinge.range = Some((lo.to_radians(), hi.to_radians()));
                }
            }
        }
    }

    fn collect(
        &mut self,
        xml:  &str,
        base: Option<&Path>,
        seen: &mut HashSet<PathBuf>,
    ) -> SceneResult<()> {
        let mut reader = Reader::from_str(xml);
        reader.config_mut().trim_text(true);
        let mut walk = Walk::default();
        let mut buf = Vec::new();

        loop {
            match reader.read_event_into(&mut buf) {
                Ok(Event::Start(ref e)) => {
                    let name = element_name(e);
                    self.visit(&name, e, &mut walk, true, base, seen)?;
                    walk.open.push(name);
                }
                Ok(Event::Empty(ref e)) => {
                    let name = element_name(e);
                    self.visit(&name, e, &mut walk, false, base, seen)?;
                }
                Ok(Event::End(ref e)) => {
                    if e.name().as_ref() == b"body" {
                        walk.bodies.pop();
                    }
                    walk.open.pop();
                }
                Ok(Event::Eof) => break,
                Ok(_) => {}
                Err(e) => return Err(SceneError::Xml(e.to_string())),
            }
            buf.clear();
        }
        Ok(())
    }

    fn visit(
        &mut self,
        name:  &str,
        e:     &BytesStart<'_>,
        walk:  &mut Walk,
        opens: bool,
        base:  Option<&Path>,
        seen:  &mut HashSet<PathBuf>,
    ) -> SceneResult<()> {
        match name {
            "option" => {
                if let Some(ts) = attr(e, "timestep") {
                    self.timestep = scalar("option", "timestep", &ts)?;
                }
                if let Some(g) = attr(e, "gravity") {
                    self.gravity = vec3("option", "gravity", &g)?;
                }
            }
            "compiler" => {
                if let Some(angle) = attr(e, "angle") {
                    self.angle_in_degrees = angle != "radian";
                }
            }
            "material" => {
                if let Some(mat_name) = attr(e, "name") {
                    let rgba = match attr(e, "rgba") {
                        Some(s) => Rgba::parse(&s).ok_or(SceneError::InvalidAttribute {
                            element:   "material",
                            attribute: "rgba",
                            value:     s,
                        })?,
                        None => Rgba::new(1.0, 1.0, 1.0, 1.0),
                    };
                    self.materials.push(MaterialDef { name: mat_name, rgba });
                }
            }
            "body" => {
                let under_world = walk.open.last().is_some_and(|p| p == "worldbody");
                let is_root = under_world && self.root.is_none();
                if is_root {
                    let pos = match attr(e, "pos") {
                        Some(p) => vec3("body", "pos", &p)?,
                        None => [0.0; 3],
                    };
                    self.root = Some(RootBody { name: attr(e, "name"), pos, ..RootBody::default() });
                }
                if opens {
                    walk.bodies.push(BodyFrame { is_root, hinge: None });
                }
            }
            "joint" => self.visit_joint(e, walk)?,
            "geom" => self.visit_geom(e, walk)?,
            "motor" => {
                if let Some(joint) = attr(e, "joint") {
                    let gear = match attr(e, "gear") {
                        Some(g) => first_float("motor", "gear", &g)?,
                        None => 1.0,
                    };
                    let ctrlrange = attr(e, "ctrlrange")
                        .map(|r| pair("motor", "ctrlrange", &r))
                        .transpose()?;
                    self.motors.push(MotorDef { joint, gear, ctrlrange });
                }
            }
            "include" => self.visit_include(e, base, seen)?,
            _ => {}
        }
        Ok(())
    }

    fn visit_joint(&mut self, e: &BytesStart<'_>, walk: &mut Walk) -> SceneResult<()> {
        let kind = attr(e, "type").unwrap_or_else(|| "hinge".to_owned());
        let Some(frame) = walk.bodies.last_mut() else {
            return Ok(());
        };
        match kind.as_str() {
            "free" => {
                if frame.is_root {
                    if let Some(root) = self.root.as_mut() {
                        root.free_joint = true;
                    }
                }
            }
            "hinge" => {
                let name = attr(e, "name").unwrap_or_else(|| format!("joint{}", self.hinges.len()));
                let damping = match attr(e, "damping") {
                    Some(d) => scalar("joint", "damping", &d)?,
                    None => 0.0,
                };
                let range = attr(e, "range")
                    .map(|r| pair("joint", "range", &r))
                    .transpose()?;
                frame.hinge = Some(name.clone());
                self.hinges.push(HingeDef { name, damping, range });
            }
            _ => {}
        }
        Ok(())
    }

    fn visit_geom(&mut self, e: &BytesStart<'_>, walk: &Walk) -> SceneResult<()> {
        let Some(frame) = walk.bodies.last() else {
            return Ok(());
        };
        if frame.is_root {
            if let Some(m) = attr(e, "mass") {
                let mass = scalar("geom", "mass", &m)?;
                if let Some(root) = self.root.as_mut() {
                    root.geom_mass += mass;
                }
            }
        }

        let is_capsule = attr(e, "type").is_some_and(|t| t == "capsule");
        if let (true, Some(fromto)) = (is_capsule, attr(e, "fromto")) {
            let v = floats("geom", "fromto", &fromto)?;
            if v.len() != 6 {
                return Err(SceneError::InvalidAttribute {
                    element:   "geom",
                    attribute: "fromto",
                    value:     fromto,
                });
            }
            let length = ((v[3] - v[0]).powi(2) + (v[4] - v[1]).powi(2) + (v[5] - v[2]).powi(2)).sqrt();
            let radius = match attr(e, "size") {
                Some(s) => first_float("geom", "size", &s)?,
                None => 0.0,
            };
            self.legs.push(LegDef { joint: frame.hinge.clone(), length, radius });
        }
        Ok(())
    }

    fn visit_include(
        &mut self,
        e:    &BytesStart<'_>,
        base: Option<&Path>,
        seen: &mut HashSet<PathBuf>,
    ) -> SceneResult<()> {
        let file = attr(e, "file")
            .filter(|f| !f.is_empty())
            .ok_or_else(|| SceneError::Include("<include> without a file attribute".to_owned()))?;
        let Some(base) = base else {
            return Err(SceneError::Include(format!(
                "cannot resolve include {file:?} in an in-memory document"
            )));
        };

        let resolved = base.join(&file);
        let canonical = resolved.canonicalize().map_err(|e| {
            SceneError::Include(format!("cannot resolve include '{}': {e}", resolved.display()))
        })?;
        if !seen.insert(canonical) {
            return Err(SceneError::Include(format!(
                "file '{}' included more than once",
                resolved.display()
            )));
        }

        let content = std::fs::read_to_string(&resolved)?;
        let nested_base = resolved.parent().unwrap_or(base).to_path_buf();
        self.collect(&content, Some(&nested_base), seen)
    }
}

// ── Walk state ────────────────────────────────────────────────────────────────

#[derive(Default)]
struct Walk {
    /// Names of currently open elements.
    open:   Vec<String>,
    bodies: Vec<BodyFrame>,
}

struct BodyFrame {
    is_root: bool,
    /// Most recent hinge declared in this body.
    hinge:   Option<String>,
}

// ── Attribute helpers ─────────────────────────────────────────────────────────

fn element_name(e: &BytesStart<'_>) -> String {
    String::from_utf8_lossy(e.name().as_ref()).into_owned()
}

fn attr(e: &BytesStart<'_>, name: &str) -> Option<String> {
    e.attributes()
        .flatten()
        .find(|a| a.key.as_ref() == name.as_bytes())
        .and_then(|a| String::from_utf8(a.value.to_vec()).ok())
}

fn floats(element: &'static str, attribute: &'static str, value: &str) -> SceneResult<Vec<f64>> {
    value
        .split_whitespace()
        .map(|s| s.parse::<f64>())
        .collect::<Result<Vec<_>, _>>()
        .map_err(|_| SceneError::InvalidAttribute { element, attribute, value: value.to_owned() })
}

fn first_float(element: &'static str, attribute: &'static str, value: &str) -> SceneResult<f64> {
    floats(element, attribute, value)?
        .first()
        .copied()
        .ok_or_else(|| SceneError::InvalidAttribute { element, attribute, value: value.to_owned() })
}

fn scalar(element: &'static str, attribute: &'static str, value: &str) -> SceneResult<f64> {
    match floats(element, attribute, value)?.as_slice() {
        [v] => Ok(*v),
        _ => Err(SceneError::InvalidAttribute { element, attribute, value: value.to_owned() }),
    }
}

fn pair(element: &'static str, attribute: &'static str, value: &str) -> SceneResult<(f64, f64)> {
    match floats(element, attribute, value)?.as_slice() {
        [a, b] => Ok((*a, *b)),
        _ => Err(SceneError::InvalidAttribute { element, attribute, value: value.to_owned() }),
    }
}

fn vec3(element: &'static str, attribute: &'static str, value: &str) -> SceneResult<[f64; 3]> {
    match floats(element, attribute, value)?.as_slice() {
        [x, y, z] => Ok([*x, *y, *z]),
        _ => Err(SceneError::InvalidAttribute { element, attribute, value: value.to_owned() }),
    }
}

//! `PlanarHopper`: a reduced-order stand-in for a full rigid-body engine.
//!
//! # Model
//!
//! The torso moves in the x–z plane; each hip is a damped, gravity-loaded
//! pendulum driven by its motor:
//!
//! ```text
//!   I θ̈ = gear · clamp(ctrl) − b θ̇ − k θ
//!   I   = (m_leg / 3 + m_torso / 4) · L²      leg inertia plus carried torso share
//!   k   = (m_leg / 2 + m_torso / 2) · g · L   gravity restoring stiffness
//! ```
//!
//! integrated semi-implicitly (damping implicit, so large `b/I` stays
//! stable).  The leg standing closest to vertical is the stance leg; while
//! it sweeps backward (θ̇ > 0 rotates the tip toward −x) it pushes the torso
//! forward at `grip · L · cos θ · θ̇`.  The torso falls under gravity until
//! the stance leg supports it.
//!
//! There are no contacts and no constraint solver.  All parameters come from
//! the MJCF scene.

use hop_core::Rgba;
use hop_scene::{MaterialDef, SceneSummary};
use tracing::debug;

use crate::{Engine, EngineError, EngineResult};

/// Capsule density, kg/m³ (MuJoCo's default geom density).
const DENSITY: f64 = 1000.0;

/// Fraction of the stance leg's backward tip speed transferred to the torso.
const GRIP: f64 = 0.35;

/// Free-joint coordinates preceding the hinge angles in `qpos`.
const FREE_QPOS: usize = 7;
/// Free-joint coordinates preceding the hinge rates in `qvel`.
const FREE_QVEL: usize = 6;

#[derive(Clone, Debug)]
struct Hip {
    gear:      f64,
    ctrlrange: Option<(f64, f64)>,
    damping:   f64,
    range:     Option<(f64, f64)>,
    inertia:   f64,
    stiffness: f64,
}

pub struct PlanarHopper {
    timestep:   f64,
    gravity:    f64,
    leg_length: f64,
    mass:       f64,
    hips:       Vec<Hip>,
    materials:  Vec<MaterialDef>,

    initial_qpos: Vec<f64>,
    qpos:         Vec<f64>,
    qvel:         Vec<f64>,
    ctrl:         Vec<f64>,
    time:         f64,
    power:        f64,
}

impl PlanarHopper {
    /// Load the scene at `path` (includes are followed).
    pub fn load(path: &std::path::Path) -> EngineResult<Self> {
        let summary = SceneSummary::from_path(path)?;
        Self::from_summary(&summary)
    }

    /// Build from an already-parsed scene.
    ///
    /// The scene must have a free-jointed root body and exactly two motors,
    /// each driving a hinge that carries a capsule leg.
    pub fn from_summary(summary: &SceneSummary) -> EngineResult<Self> {
        let root = summary
            .root
            .as_ref()
            .filter(|r| r.free_joint)
            .ok_or_else(|| EngineError::Unsupported("no free-jointed root body".to_owned()))?;

        if summary.motors.len() != 2 {
            return Err(EngineError::Unsupported(format!(
                "expected 2 motors, found {}",
                summary.motors.len()
            )));
        }

        let torso_mass = if root.geom_mass > 0.0 { root.geom_mass } else { 1.0 };
        let gravity = -summary.gravity[2];

        let mut hips = Vec::with_capacity(2);
        let mut leg_length: f64 = 0.0;
        let mut leg_mass_total = 0.0;
        for motor in &summary.motors {
            let hinge = summary.hinge(&motor.joint).ok_or_else(|| {
                EngineError::Unsupported(format!("motor drives unknown joint {:?}", motor.joint))
            })?;
            let leg = summary.leg_for(&motor.joint).ok_or_else(|| {
                EngineError::Unsupported(format!("joint {:?} carries no capsule leg", motor.joint))
            })?;

            let (l, r) = (leg.length, leg.radius);
            let volume = std::f64::consts::PI * r * r * l + 4.0 / 3.0 * std::f64::consts::PI * r.powi(3);
            let m_leg = DENSITY * volume;
            leg_mass_total += m_leg;
            leg_length = leg_length.max(l);

            hips.push(Hip {
                gear:      motor.gear,
                ctrlrange: motor.ctrlrange,
                damping:   hinge.damping,
                range:     hinge.range,
                inertia:   (m_leg / 3.0 + torso_mass / 4.0) * l * l,
                stiffness: (m_leg / 2.0 + torso_mass / 2.0) * gravity * l,
            });
        }

        let mut initial_qpos = vec![0.0; FREE_QPOS + hips.len()];
        initial_qpos[..3].copy_from_slice(&root.pos);
        initial_qpos[3] = 1.0; // identity quaternion

        let nv = FREE_QVEL + hips.len();
        let nu = hips.len();
        let mass = torso_mass + leg_mass_total;
        debug!(leg_length, mass, timestep = summary.timestep, "planar hopper built");

        Ok(Self {
            timestep: summary.timestep,
            gravity,
            leg_length,
            mass,
            hips,
            materials: summary.materials.clone(),
            qpos: initial_qpos.clone(),
            initial_qpos,
            qvel: vec![0.0; nv],
            ctrl: vec![0.0; nu],
            time: 0.0,
            power: 0.0,
        })
    }

    pub fn leg_length(&self) -> f64 {
        self.leg_length
    }

    /// Hip angles, radians.
    pub fn hip_angles(&self) -> &[f64] {
        &self.qpos[FREE_QPOS..]
    }

    fn integrate_hips(&mut self) {
        let dt = self.timestep;
        let mut power = 0.0;
        for (i, hip) in self.hips.iter().enumerate() {
            let u = match hip.ctrlrange {
                Some((lo, hi)) => self.ctrl[i].clamp(lo, hi),
                None => self.ctrl[i],
            };
            let torque = hip.gear * u;

            let theta = self.qpos[FREE_QPOS + i];
            let omega = self.qvel[FREE_QVEL + i];
            let accel_explicit = (torque - hip.stiffness * theta) / hip.inertia;
            let mut omega_new = (omega + dt * accel_explicit) / (1.0 + dt * hip.damping / hip.inertia);
            let mut theta_new = theta + dt * omega_new;

            if let Some((lo, hi)) = hip.range {
                if theta_new < lo || theta_new > hi {
                    theta_new = theta_new.clamp(lo, hi);
                    omega_new = 0.0;
                }
            }

            self.qpos[FREE_QPOS + i] = theta_new;
            self.qvel[FREE_QVEL + i] = omega_new;
            power += (torque * omega_new).abs();
        }
        self.power = power;
    }

    /// Index of the hip closest to vertical.
    fn stance(&self) -> usize {
        let angles = self.hip_angles();
        (0..angles.len())
            .min_by(|&a, &b| angles[a].abs().total_cmp(&angles[b].abs()))
            .unwrap_or(0)
    }

    fn integrate_torso(&mut self) {
        let dt = self.timestep;
        let s = self.stance();
        let theta = self.qpos[FREE_QPOS + s];
        let omega = self.qvel[FREE_QVEL + s];
        let support = self.leg_length * theta.cos();

        // Vertical: free fall onto the stance leg.
        let mut vz = self.qvel[2] - self.gravity * dt;
        let mut z = self.qpos[2] + vz * dt;
        let grounded = z <= support;
        if grounded {
            z = support;
            vz = vz.max(0.0);
        }

        // Horizontal: only a planted leg can push.
        if grounded {
            self.qvel[0] = GRIP * self.leg_length * theta.cos() * omega.max(0.0);
        }
        self.qpos[0] += self.qvel[0] * dt;
        self.qpos[2] = z;
        self.qvel[2] = vz;
    }
}

impl Engine for PlanarHopper {
    fn timestep(&self) -> f64 {
        self.timestep
    }

    fn time(&self) -> f64 {
        self.time
    }

    fn qpos(&self) -> &[f64] {
        &self.qpos
    }

    fn qvel(&self) -> &[f64] {
        &self.qvel
    }

    fn actuator_count(&self) -> usize {
        self.hips.len()
    }

    fn set_ctrl(&mut self, ctrl: &[f64]) -> EngineResult<()> {
        if ctrl.len() != self.ctrl.len() {
            return Err(EngineError::CtrlLength { expected: self.ctrl.len(), got: ctrl.len() });
        }
        self.ctrl.copy_from_slice(ctrl);
        Ok(())
    }

    fn ctrl(&self) -> &[f64] {
        &self.ctrl
    }

    fn step(&mut self) {
        self.integrate_hips();
        self.integrate_torso();
        self.time += self.timestep;
    }

    fn reset(&mut self) {
        self.qpos.copy_from_slice(&self.initial_qpos);
        self.qvel.fill(0.0);
        self.ctrl.fill(0.0);
        self.time = 0.0;
        self.power = 0.0;
    }

    fn material_id(&self, name: &str) -> Option<usize> {
        self.materials.iter().position(|m| m.name == name)
    }

    fn material_rgba(&self, id: usize) -> Option<Rgba> {
        self.materials.get(id).map(|m| m.rgba)
    }

    fn set_material_rgba(&mut self, id: usize, rgba: Rgba) -> EngineResult<()> {
        let material = self.materials.get_mut(id).ok_or(EngineError::MaterialOutOfRange(id))?;
        material.rgba = rgba;
        Ok(())
    }

    fn actuator_power(&self) -> f64 {
        self.power
    }

    fn total_mass(&self) -> f64 {
        self.mass
    }
}

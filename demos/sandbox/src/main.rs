// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

// Gyra Sandbox
// Walks a camera-rig orientation through the full rotation pipeline:
// Euler construction, composition, slerp animation, matrix conversion,
// extraction, and blittable packing.

use anyhow::{ensure, Result};
use gyra_core::math::{degrees_to_radians, Mat4, Quaternion, Vec3};

const KEYFRAME_COUNT: usize = 9;

fn log_orientation(label: &str, q: Quaternion) {
    log::info!(
        " -> {label}: ({:.4}, {:.4}, {:.4}, {:.4}), length {:.6}",
        q.x,
        q.y,
        q.z,
        q.w,
        q.length()
    );
}

fn main() -> Result<()> {
    use env_logger::{Builder, Env};

    Builder::from_env(Env::default().default_filter_or("info")).init();

    // --- Step 1: Build the starting orientation from Euler angles ---
    let rig = Quaternion::from_yaw_pitch_roll(
        degrees_to_radians(30.0),
        degrees_to_radians(-15.0),
        degrees_to_radians(0.0),
    );
    log_orientation("Rig orientation (yaw 30, pitch -15)", rig);

    // --- Step 2: Compose with a turret turn, in application order ---
    let turret_turn = Quaternion::from_axis_angle(Vec3::Y, degrees_to_radians(90.0));
    let goal = rig.then(turret_turn);
    log_orientation("Goal after 90-degree turret turn", goal);
    ensure!(
        goal.dot(turret_turn * rig) > 1.0 - 1e-12,
        "then() must agree with reversed Hamilton order"
    );

    // --- Step 3: Animate the rig toward the goal with slerp ---
    let probe = Vec3::new(0.0, 0.0, -1.0); // Camera forward
    for step in [0, 2, 4, 6, 8] {
        let t = step as f64 / (KEYFRAME_COUNT - 1) as f64;
        let frame = Quaternion::slerp(rig, goal, t);
        let forward = frame.rotate_vec3(probe);
        log::info!(
            " -> t = {t:.2}: forward ({:.4}, {:.4}, {:.4})",
            forward.x,
            forward.y,
            forward.z
        );
    }

    // --- Step 4: Convert to a matrix and extract back ---
    let m = Mat4::from_quaternion(goal);
    let extracted = Quaternion::from_rotation_matrix(&m);
    log_orientation("Extracted from matrix", extracted);

    let direct = goal.rotate_vec3(probe);
    let via_matrix = probe.transform(&m);
    ensure!(
        (direct - via_matrix).length() < 1e-9,
        "matrix and quaternion transforms disagree: {direct:?} vs {via_matrix:?}"
    );
    ensure!(
        goal.dot(extracted).abs() > 1.0 - 1e-9,
        "extraction lost the rotation: {goal:?} vs {extracted:?}"
    );

    // --- Step 5: Pack the keyframes into a blittable buffer ---
    let keyframes: Vec<Quaternion> = (0..KEYFRAME_COUNT)
        .map(|i| Quaternion::slerp(rig, goal, i as f64 / (KEYFRAME_COUNT - 1) as f64))
        .collect();
    let bytes: &[u8] = bytemuck::cast_slice(&keyframes);
    ensure!(bytes.len() == KEYFRAME_COUNT * 32, "unexpected keyframe stride");
    log::info!(
        " -> Packed {} keyframes into {} bytes ({} bytes each)",
        keyframes.len(),
        bytes.len(),
        bytes.len() / keyframes.len()
    );

    log::info!("Rotation pipeline completed successfully.");
    Ok(())
}

//! Builds a rotation from an axis and an angle, then recovers it from a noisy copy of its matrix
//! by projecting onto the closest rotation with an SVD.
//!
//! Usage: `rotation [x y z degrees]`

use anyhow::{bail, Context};
use mathpack::{
    linalg::{scalar, vec3, MatrixN, Quat},
    Mode, Svd,
};

fn main() -> anyhow::Result<()> {
    mathpack::init_logger!();

    let args = std::env::args()
        .skip(1)
        .map(|arg| arg.parse::<f64>().with_context(|| format!("invalid number '{arg}'")))
        .collect::<anyhow::Result<Vec<_>>>()?;
    let (axis, degrees) = match args[..] {
        [] => (vec3(1.0, 2.0, 3.0), 60.0),
        [x, y, z, deg] => (vec3(x, y, z), deg),
        _ => bail!("usage: rotation [x y z degrees]"),
    };

    let q = Quat::from_axis_angle(axis, degrees * scalar::DEG_TO_RAD);
    println!("quaternion: {q}");
    println!("rotation matrix:\n{}", q.to_mat3());

    let mut rng = fastrand::Rng::with_seed(7);
    let noisy = MatrixN::from(q.to_mat3()) + &MatrixN::from_fn(3, 3, |_, _| (rng.f64() - 0.5) * 0.02);

    // The closest rotation to M = U·S·Vᵀ is U·Vᵀ.
    let svd = Svd::new(&noisy, Mode::Economy)?;
    let rotation = svd.u() * &svd.v().transpose();
    let recovered = Quat::from_matrix_n(&rotation);

    println!("recovered axis: {}", recovered.axis());
    println!(
        "recovered angle: {:.3} degrees",
        recovered.angle() * scalar::RAD_TO_DEG
    );
    println!(
        "error: {:.4} degrees",
        q.distance(recovered) * scalar::RAD_TO_DEG
    );

    Ok(())
}

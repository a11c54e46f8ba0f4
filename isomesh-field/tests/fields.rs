use isomesh_field::{Constant, MetaballField, NoiseTerrain, Plane, ScalarField, Sphere};
use isomesh_math::{point3, vec3};

fn fields() -> Vec<Box<dyn ScalarField>> {
    vec![
        Box::new(Constant(-1.0)),
        Box::new(Plane::new(vec3(0.0, 1.0, 0.0), 0.25)),
        Box::new(Sphere::new(point3(0.5, 0.5, 0.5), 0.25)),
        Box::new(MetaballField::random(4, point3(0.0, 0.0, 0.0), point3(1.0, 1.0, 1.0), 7)),
        Box::new(NoiseTerrain::default().with_amplitude(0.2)),
    ]
}

#[test]
fn fields_are_finite_over_region() {
    for mut field in fields() {
        field.advance();
        for i in 0..=10 {
            for j in 0..=10 {
                for k in 0..=10 {
                    let position = point3(i as f32 / 10.0, j as f32 / 10.0, k as f32 / 10.0);
                    assert!(field.evaluate(position).is_finite());
                }
            }
        }
    }
}

#[test]
fn static_fields_ignore_advance() {
    let position = point3(0.3, 0.6, 0.9);
    let mut plane = Plane::new(vec3(0.0, 1.0, 0.0), 0.25);
    let before = plane.evaluate(position);
    plane.advance();
    assert_eq!(plane.evaluate(position), before);
}

#[test]
fn animated_metaballs_move() {
    let mut field = MetaballField::random(3, point3(0.0, 0.0, 0.0), point3(1.0, 1.0, 1.0), 11)
        .with_time_step(0.25);
    let centers = field.balls.iter().map(|b| b.center).collect::<Vec<_>>();
    field.advance();
    let moved = field
        .balls
        .iter()
        .zip(centers.iter())
        .any(|(ball, center)| ball.center != *center);
    assert!(moved);
}

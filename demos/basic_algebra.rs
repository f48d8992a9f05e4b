use calgebra::utils::{parse_matrix, parse_vector};
use calgebra::{AlgebraEngine, ComplexScalar, DotKernel, MatrixBuffer, NormKind, TensorBuffer, VectorBuffer};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let engine = AlgebraEngine::new().with_kernel(DotKernel::Unrolled8);

    let u = parse_vector("u", "1\n2\n3\n")?;
    let v = VectorBuffer::new(
        "v",
        vec![ComplexScalar::new(0.0, 1.0), ComplexScalar::from_real(-1.0), ComplexScalar::new(2.0, -0.5)],
    )?;
    println!("{u}\n{v}");
    println!("u . v = {}", engine.dot_product(&u, &v)?);
    let w = engine.cross_product(&u, &v)?;
    println!("{w}");
    println!(
        "|u| = {:.3}, angle(u, u x v) = {:.1} deg",
        engine.norm(&u, NormKind::L2),
        engine.angle_between_degrees(&u, &w)?
    );

    let a = parse_matrix("A", "2 0 1\n1 3 0\n0 1 4\n")?;
    let id = MatrixBuffer::identity("I", 3)?;
    println!("{a}");
    println!("{}", engine.matrix_multiply(&a, &engine.matrix_add(&a, &id)?)?);
    println!("det(A) = {}, properties = {:?}", engine.determinant(&a)?, a.properties());
    println!("{}", engine.inverse(&a)?);

    let t = TensorBuffer::new("T", vec![a.clone(), id])?;
    println!("{}", engine.tensor_contract(&t, &t)?);
    Ok(())
}

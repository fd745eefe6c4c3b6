use vecmat::{add_matrices, add_vectors, to_string, to_string_with, FormatOptions, Matrix, Vector};

fn main() {
    env_logger::init();

    // parse two vectors out of free-form text
    let a: Vector<i64> = Vector::from_string("x = (3, 4, 12)");
    let b: Vector<i64> = Vector::from_string("1 - 2 - 3");
    println!("a = {}, sum = {}, norm = {}", a, a.sum(), a.norm());

    match add_vectors(&a, &b) {
        Ok(c) => println!("a + b = {}", to_string(&c)),
        Err(e) => println!("a + b failed: {e}"),
    }
    if let Err(e) = add_vectors(&a, &Vector::new(2)) {
        println!("expected failure: {e}");
    }

    let m = Matrix::from(vec![vec![1, 2], vec![3, 4]]);
    let m2 = match add_matrices(&m, &m) {
        Ok(m2) => m2,
        Err(e) => {
            println!("m + m failed: {e}");
            return;
        }
    };
    println!("m + m =\n{}", to_string(&m2));
    println!("sum = {}", m2.sum());
    println!("{}", to_string_with(&m2, &FormatOptions { indent: 4 }));
}

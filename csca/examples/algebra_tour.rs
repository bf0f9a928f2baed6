//! Walk through building, mutating and combining CSC matrices
//!
//! Set `RUST_LOG=csca=trace` to see the engine's mutation and kernel logs.

use csca::{CompressedColumn, DenseMatrix, DenseVector, Storage, StorageConfig};
use std::time::Instant;
use tracing_subscriber::EnvFilter;

fn main() -> csca::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("Building matrices from dense rows...");
    let a = CompressedColumn::from_dense(&DenseMatrix::from_rows(&[
        [1.0, 4.0, -2.0],
        [2.0, 7.0, 3.0],
    ])?)?;
    let b = CompressedColumn::from_dense(&DenseMatrix::from_rows(&[
        [5.0, -1.0, 6.0],
        [-2.0, 1.0, -3.0],
    ])?)?;
    println!("   A: {} x {}, {} stored", a.row_count(), a.column_count(), a.nnz());
    println!("   B: {} x {}, {} stored", b.row_count(), b.column_count(), b.nnz());

    let sum = (&a + &b)?;
    println!("\nA + B = {:?}", sum.to_array());
    println!("   Stored entries: {} (cancelled entries are dropped)", sum.nnz());

    println!("\nA / 4 = {:?}", (&a / 4.0).to_array());
    println!("A · Bᵗ = {:?}", a.mul_transpose(&b)?.to_array());
    println!("Aᵗ · B = {:?}", a.transpose_mul(&b)?.to_array());

    let v = DenseVector::new(vec![1.0, 0.5, -1.0]);
    println!("A · v = {:?}", a.mul_vector(&v)?.as_slice());

    println!("\nMutating in place:");
    let mut m = CompressedColumn::from_triplets(
        3,
        5,
        &[(0, 0, 1.0), (2, 0, 2.0), (0, 3, -2.0), (2, 4, 5.5)],
    )?;
    println!("   Column pointers: {:?}", m.column_pointers());
    m.insert(1, 0, -3.2);
    println!("   After insert (1,0): {:?}", m.column_pointers());
    m.remove(0, 0);
    println!("   After remove (0,0): {:?}", m.column_pointers());

    println!("\nTiming a 2000 x 2000 identity product...");
    let identity = CompressedColumn::<f64>::identity(2000)?;
    let start = Instant::now();
    let product = identity.mul(&identity)?;
    println!(
        "   {} stored entries in {:.3}ms",
        product.nnz(),
        start.elapsed().as_secs_f64() * 1000.0
    );

    let storage = Storage::from(sum);
    let layout = storage.to_compressed_column();
    let view = layout.layout();
    let (rows, pointers) = view.to_i32_indices()?;
    println!("\nSolver hand-off arrays: rows {rows:?}, pointers {pointers:?}");
    println!(
        "   {} values, {} bytes",
        view.data_type(),
        view.value_byte_len()
    );

    let coo = StorageConfig::with_format(csca::StorageFormat::Coo);
    match Storage::<f64>::with_config(2, 2, &coo) {
        Ok(_) => println!("COO storage created"),
        Err(err) => println!("COO storage: {err}"),
    }

    Ok(())
}

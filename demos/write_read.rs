//! Write a 5x6 integer matrix to a container, then read it back and report it.
use sdsfile::{ByteOrder, ClassKind, ContainerFile, DataspaceDescriptor, DatatypeDescriptor};

const FILE_NAME: &str = "SDS.h5";
const DATASET_NAME: &str = "IntArray";
const NX: usize = 5;
const NY: usize = 6;

fn write() -> sdsfile::Result<()> {
    let data: Vec<i32> = (0..NX)
        .flat_map(|j| (0..NY).map(move |i| (i + j) as i32))
        .collect();

    let mut file = ContainerFile::create_new(FILE_NAME)?;
    let dataspace = DataspaceDescriptor::new(2, &[NX as u64, NY as u64])?;
    // stored little-endian whatever the host order
    let datatype = DatatypeDescriptor::of::<i32>(ByteOrder::LittleEndian);
    let dataset = file.create_dataset(DATASET_NAME, datatype, dataspace)?;
    file.write_all(&dataset, &data)?;
    file.close()
}

fn read() -> sdsfile::Result<()> {
    let mut file = ContainerFile::open_existing(FILE_NAME)?;
    let dataset = file.open_dataset(DATASET_NAME)?;

    let datatype = dataset.datatype();
    if datatype.class() == ClassKind::Integer {
        println!("Data set has INTEGER type");
    }
    if datatype.byte_order() == ByteOrder::LittleEndian {
        println!("Little endian order");
    }
    println!("Data size is {}", datatype.size());

    let dataspace = dataset.dataspace();
    let dims = dataspace.extents();
    println!(
        "rank {}, dimensions {} x {}",
        dataspace.rank(),
        dims[0],
        dims[1]
    );

    let mut data_out = vec![0i32; NX * NY];
    file.read_all(&dataset, &mut data_out)?;
    for row in data_out.chunks(NY) {
        let line: Vec<String> = row.iter().map(i32::to_string).collect();
        println!("{}", line.join(" "));
    }
    file.close()
}

fn main() -> sdsfile::Result<()> {
    env_logger::init();
    write()?;
    read()
}

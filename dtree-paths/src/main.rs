use dtree::{DEnt, DTree, DirError};
use log::debug;

fn main() -> Result<(), DirError> {
    env_logger::init();

    let dt = DTree::from_entries(vec![DEnt::new(
        "a",
        DTree::from_entries(vec![
            DEnt::new("b", DTree::from_entries(vec![DEnt::leaf("d")?])?)?,
            DEnt::leaf("c")?,
        ])?,
    )?])?;
    debug!("tree: {:?}", dt);

    println!("{:?}", dt.sorted_paths());
    Ok(())
}

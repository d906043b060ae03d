use layerpack::{LayerPacker, PackageList, PackageSpec, Pallet};

fn main() {
    env_logger::init();

    let packages = PackageList::from_specs(vec![PackageSpec::new("box", (40, 10, 40), 10)]).unwrap();
    let pallet = Pallet::new(120, 80, 40).unwrap();

    let packer = LayerPacker::new(pallet).stop_when_empty(true);
    let result = packer.plan(&packages).unwrap();

    println!("Pack result: {:#?}", result);
}

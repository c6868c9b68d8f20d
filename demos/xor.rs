use backprop_nn::presets::{DatasetPreset, NetworkPreset};
use backprop_nn::train_loop;

fn main() -> backprop_nn::Result<()> {
    env_logger::init();

    let dataset = DatasetPreset::Xor.dataset();
    let preset = NetworkPreset::TwoByOne;
    let mut network = preset.network_spec(&dataset)?.build()?;

    let report = train_loop(&mut network, &dataset.inputs, &dataset.targets, &preset.train_config())?;
    for stats in &report.history {
        println!("Epoch {}: loss = {:.6}", stats.epoch, stats.loss);
    }

    for input in &dataset.inputs {
        println!("Input: {:?} -> Output: {:.4}", input, network.calculate(input)?[0]);
    }
    Ok(())
}

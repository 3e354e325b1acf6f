use autoready::config::Input;
use schemars::schema_for;

fn main() {
    let schema = schema_for!(Input);
    let yaml =
        serde_yaml::to_string(&schema).expect("serialize input schema");
    println!("{}", yaml);
}

use sap::{ArgumentSpec, CommandLineParser, GeneralParser};

const OPERATIONS: [&str; 6] = ["add", "subtract", "multiply", "divide", "modulo", "exponent"];

fn main() {
    let mut parser = CommandLineParser::new("calculator")
        .version(0, 0, 1)
        .author("Chua Hou")
        .about("Example application")
        .add(
            ArgumentSpec::flag("help")
                .short('h')
                .help("Print this help message"),
        )
        .add(ArgumentSpec::flag("add").short('a').help("Add x and y"))
        .add(
            ArgumentSpec::flag("subtract")
                .short('s')
                .help("Subtract y from x"),
        )
        .add(
            ArgumentSpec::flag("multiply")
                .short('m')
                .help("Multiply x and y"),
        )
        .add(ArgumentSpec::flag("divide").short('d').help("Divide x by y"))
        .add(
            ArgumentSpec::flag("modulo")
                .short('M')
                .help("Calculate x mod y"),
        )
        .add(
            ArgumentSpec::flag("exponent")
                .short('e')
                .help("Calculate x to the power of y"),
        )
        .add(
            ArgumentSpec::valued("type")
                .short('t')
                .required()
                .help("[ int | float ] type of numbers"),
        )
        .add(ArgumentSpec::positional("x").help("First argument for calculator"))
        .add(ArgumentSpec::positional("y").help("Second argument for calculator"))
        .build();

    parser.parse();

    if parser.is_matched("help") {
        parser.print_help();
        return;
    }

    let selected: Vec<&str> = OPERATIONS
        .iter()
        .copied()
        .filter(|operation| parser.is_matched(operation))
        .collect();
    let operation = match selected.as_slice() {
        [operation] => *operation,
        _ => fail(&parser, "Exactly one operation must be selected."),
    };
    let x = parser.value("x").unwrap_or_default();
    let y = parser.value("y").unwrap_or_default();

    let result = match parser.value("type") {
        Some("int") => calculate_int(operation, x, y),
        Some("float") => calculate_float(operation, x, y),
        _ => Err("Type must be one of 'int' or 'float'.".to_string()),
    };

    match result {
        Ok(result) => println!("{result}"),
        Err(message) => fail(&parser, &message),
    }
}

fn calculate_int(operation: &str, x: &str, y: &str) -> Result<String, String> {
    let x: i64 = x.parse().map_err(|_| format!("'{x}' is not an int."))?;
    let y: i64 = y.parse().map_err(|_| format!("'{y}' is not an int."))?;

    let result = match operation {
        "add" => x.checked_add(y),
        "subtract" => x.checked_sub(y),
        "multiply" => x.checked_mul(y),
        "divide" => x.checked_div(y),
        "modulo" => x.checked_rem(y),
        "exponent" => u32::try_from(y).ok().and_then(|y| x.checked_pow(y)),
        _ => unreachable!("internal error - unknown operation '{operation}'"),
    };

    result
        .map(|result| result.to_string())
        .ok_or_else(|| format!("Cannot {operation} {x} and {y} as ints."))
}

fn calculate_float(operation: &str, x: &str, y: &str) -> Result<String, String> {
    let x: f64 = x.parse().map_err(|_| format!("'{x}' is not a float."))?;
    let y: f64 = y.parse().map_err(|_| format!("'{y}' is not a float."))?;

    let result = match operation {
        "add" => x + y,
        "subtract" => x - y,
        "multiply" => x * y,
        "divide" => x / y,
        "modulo" => x % y,
        "exponent" => x.powf(y),
        _ => unreachable!("internal error - unknown operation '{operation}'"),
    };

    Ok(result.to_string())
}

fn fail(parser: &GeneralParser, message: &str) -> ! {
    eprintln!("{message}");
    parser.print_help();
    std::process::exit(1);
}

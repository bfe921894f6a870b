use ducktype_check::{check_assignable, is_assignable, merge_all, merge_shapes, Record, Value};
use ducktype_shape::{FieldSpec, Shape, TypeTag};

fn main() {
    // Example 1: Interface extension
    println!("=== Example 1: Interface Extension ===");
    let account_system = Shape::new(
        "AccountSystem",
        vec![
            FieldSpec::required("email", TypeTag::String),
            FieldSpec::required("password", TypeTag::String),
            FieldSpec::required("subscribed", TypeTag::Boolean),
        ],
    );
    let personal_info = Shape::new(
        "AccountPersonalInfo",
        vec![
            FieldSpec::optional("nickname", TypeTag::String),
            FieldSpec::optional("birth", TypeTag::Date),
            FieldSpec::optional("gender", TypeTag::Enum("Gender".to_string())),
        ],
    );

    let user_account = merge_shapes(&account_system, &personal_info)
        .unwrap()
        .renamed("UserAccount");
    println!("{}", user_account);

    // Example 2: A record that satisfies the merged shape
    println!("\n=== Example 2: Assignability ===");
    let maxwell = Record::new()
        .with("email", "max@example.com")
        .with("password", "<hashed-password>")
        .with("subscribed", false)
        .with("nickname", "Maxwell")
        .with(
            "gender",
            Value::EnumMember {
                enum_name: "Gender".to_string(),
                member: "Male".to_string(),
            },
        );
    println!("maxwell is UserAccount: {}", is_assignable(&maxwell, &user_account));

    // Example 3: Reported failures
    println!("\n=== Example 3: Failure Reporting ===");
    let martin = Record::new()
        .with("password", "<hashed-password>")
        .with("nickname", "Mars");
    if let Err(errors) = check_assignable(&martin, &user_account) {
        for error in &errors {
            println!("martin: {}", error);
        }
    }

    // Example 4: Conflicting composition
    println!("\n=== Example 4: Conflicting Composition ===");
    let i1 = Shape::new(
        "I1",
        vec![
            FieldSpec::required("a", TypeTag::String),
            FieldSpec::required("b", TypeTag::Number),
        ],
    );
    let i2 = Shape::new(
        "I2",
        vec![
            FieldSpec::required("b", TypeTag::Number),
            FieldSpec::required("c", TypeTag::Boolean),
        ],
    );
    let i3 = Shape::new(
        "I3",
        vec![
            FieldSpec::required("a", TypeTag::String),
            FieldSpec::required("c", TypeTag::String),
        ],
    );

    match merge_all("I12", &[&i1, &i2]) {
        Ok(shape) => println!("I12 composes: {}", shape),
        Err(err) => println!("I12 fails: {}", err),
    }
    match merge_all("I123", &[&i1, &i2, &i3]) {
        Ok(shape) => println!("I123 composes: {}", shape),
        Err(err) => println!("I123 fails: {}", err),
    }
}

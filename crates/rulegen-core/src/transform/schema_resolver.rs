use crate::error::ResolveError;
use crate::ir::IrType;
use crate::naming::NamingPolicy;
use crate::parse::schema::{PrimitiveProperty, Property, definition_name};

/// Convert a property descriptor to an `IrType`. References must still carry
/// the schema root prefix.
pub fn property_to_ir_type(
    naming: &NamingPolicy<'_>,
    property: &Property,
) -> Result<IrType, ResolveError> {
    match property {
        Property::Ref { ref_path } => {
            let name = definition_name(ref_path)?;
            Ok(IrType::Ref(naming.to_model_name(name)))
        }
        Property::Array(array) => Ok(IrType::Array(Box::new(property_to_ir_type(
            naming,
            &array.items,
        )?))),
        Property::Primitive(primitive) => Ok(primitive_to_ir_type(primitive)),
    }
}

fn primitive_to_ir_type(primitive: &PrimitiveProperty) -> IrType {
    match primitive.property_type.as_deref() {
        Some("string") => match primitive.format.as_deref() {
            Some("date-time" | "date") => IrType::DateTime,
            Some("binary" | "byte") => IrType::Binary,
            _ => IrType::String,
        },
        Some("number") => IrType::Number,
        Some("integer") => IrType::Integer,
        Some("boolean") => IrType::Boolean,
        Some("file") => IrType::Binary,
        Some("array") => IrType::Array(Box::new(IrType::Any)),
        Some("object") => IrType::Map(Box::new(IrType::Any)),
        _ => IrType::Any,
    }
}

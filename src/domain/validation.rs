//! Input validation for product ids and the admin product form

use serde::Deserialize;

use super::{DomainError, FieldError, NewProduct};

/// A product id known to be a positive integer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ProductId(i32);

impl ProductId {
    pub fn new(id: i64) -> Result<Self, DomainError> {
        if id <= 0 {
            return Err(DomainError::InvalidInput(format!(
                "product id must be positive, got {}",
                id
            )));
        }
        i32::try_from(id)
            .map(Self)
            .map_err(|_| DomainError::InvalidInput(format!("product id {} is out of range", id)))
    }

    /// Parse an id from request text. Only plain decimal integers are accepted.
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        let id = raw
            .trim()
            .parse::<i64>()
            .map_err(|_| DomainError::InvalidInput(format!("'{}' is not a valid product id", raw)))?;
        Self::new(id)
    }

    pub fn get(self) -> i32 {
        self.0
    }
}

impl std::fmt::Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Admin form as submitted: every field is raw, possibly missing, text.
#[derive(Debug, Clone, Default, Deserialize, utoipa::ToSchema)]
pub struct NewProductForm {
    pub name: Option<String>,
    pub year: Option<String>,
    pub price: Option<String>,
    pub stock: Option<String>,
    #[serde(alias = "serialNumber")]
    pub serial_number: Option<String>,
}

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

impl NewProductForm {
    /// Check every field and collect all failures before rejecting.
    pub fn validate(&self) -> Result<NewProduct, DomainError> {
        let mut errors = Vec::new();

        let name = present(&self.name);
        if name.is_none() {
            errors.push(FieldError::new("name", "is required"));
        }

        let year = match present(&self.year) {
            None => {
                errors.push(FieldError::new("year", "is required"));
                None
            }
            Some(raw) => match raw.parse::<i32>() {
                Ok(year) => Some(year),
                Err(_) => {
                    errors.push(FieldError::new("year", "must be an integer"));
                    None
                }
            },
        };

        let price = match present(&self.price) {
            None => {
                errors.push(FieldError::new("price", "is required"));
                None
            }
            Some(raw) => match raw.parse::<f64>() {
                Ok(price) if price.is_finite() && price >= 0.0 => Some(price),
                Ok(_) => {
                    errors.push(FieldError::new("price", "must be a non-negative number"));
                    None
                }
                Err(_) => {
                    errors.push(FieldError::new("price", "must be a number"));
                    None
                }
            },
        };

        let stock = match present(&self.stock) {
            None => {
                errors.push(FieldError::new("stock", "is required"));
                None
            }
            Some(raw) => match raw.parse::<i32>() {
                Ok(stock) if stock >= 0 => Some(stock),
                Ok(_) => {
                    errors.push(FieldError::new("stock", "must not be negative"));
                    None
                }
                Err(_) => {
                    errors.push(FieldError::new("stock", "must be an integer"));
                    None
                }
            },
        };

        let serial_number = present(&self.serial_number);
        if serial_number.is_none() {
            errors.push(FieldError::new("serial_number", "is required"));
        }

        match (name, year, price, stock, serial_number) {
            (Some(name), Some(year), Some(price), Some(stock), Some(serial_number))
                if errors.is_empty() =>
            {
                Ok(NewProduct {
                    name: name.to_string(),
                    year,
                    price,
                    stock,
                    serial_number: serial_number.to_string(),
                })
            }
            _ => Err(DomainError::Validation(errors)),
        }
    }
}

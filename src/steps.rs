use application::{Field, FieldSpec};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    pub title: &'static str,
    pub fields: Vec<Field>,
}

impl Step {
    pub fn new(title: &'static str, fields: &[Field]) -> Self {
        Self {
            title,
            fields: fields.to_vec(),
        }
    }

    pub fn specs(&self) -> impl Iterator<Item = &'static FieldSpec> + '_ {
        self.fields.iter().map(|field| field.spec())
    }

    pub fn required(&self) -> impl Iterator<Item = &'static FieldSpec> + '_ {
        self.specs().filter(|spec| spec.required)
    }
}

/// Ordered, never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Steps {
    steps: Vec<Step>,
}

impl Steps {
    pub fn new(steps: Vec<Step>) -> Option<Self> {
        (!steps.is_empty()).then_some(Self { steps })
    }

    pub fn standard() -> Self {
        use Field::*;

        Self {
            steps: vec![
                Step::new("Personal Details", &[FullName, PhoneNumber, Email, Dob]),
                Step::new("Current Address", &[Address, City, State, Zip]),
                Step::new("Employment & Income", &[Occupation, Income, Rent]),
                Step::new("Household", &[Married, Pets, Car]),
                Step::new(
                    "Lease Preferences",
                    &[
                        KeysDate,
                        StayDate,
                        LeaseDuration,
                        MoveInDate,
                        SecurityDeposit,
                        RentPayment,
                    ],
                ),
                Step::new("Fees & Payment", &[ApplicationFee, PaymentMethod]),
                Step::new("Signature", &[Signature]),
                Step::new("Review", &[]),
            ],
        }
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn last_index(&self) -> usize {
        self.steps.len() - 1
    }

    pub fn get(&self, index: usize) -> Option<&Step> {
        self.steps.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Step> {
        self.steps.iter()
    }

    /// Schema entries of every step, in form order.
    pub fn specs(&self) -> impl Iterator<Item = &'static FieldSpec> + '_ {
        self.iter().flat_map(|step| step.specs())
    }
}

impl Default for Steps {
    fn default() -> Self {
        Self::standard()
    }
}

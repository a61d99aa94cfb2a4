use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Email,
    Date,
    Number,
    Tel,
    Radio,
    Select,
    Signature,
}

impl FieldKind {
    /// Inputs validated by their trimmed value.
    pub fn is_text_like(self) -> bool {
        !matches!(self, FieldKind::Radio | FieldKind::Signature)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub field: Field,
    pub ui_id: &'static str,
    pub kind: FieldKind,
    pub required: bool,
}

macro_rules! fields {
    ($($variant:ident => $key:literal, $ui_id:literal, $kind:ident, $required:literal;)+) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum Field {
            $($variant,)+
        }

        impl Field {
            pub const ALL: &'static [Field] = &[$(Field::$variant,)+];

            pub fn key(self) -> &'static str {
                match self {
                    $(Field::$variant => $key,)+
                }
            }

            pub fn from_key(key: &str) -> Option<Field> {
                match key {
                    $($key => Some(Field::$variant),)+
                    _ => None,
                }
            }

            pub fn spec(self) -> &'static FieldSpec {
                match self {
                    $(Field::$variant => &FieldSpec {
                        field: Field::$variant,
                        ui_id: $ui_id,
                        kind: FieldKind::$kind,
                        required: $required,
                    },)+
                }
            }
        }
    };
}

fields! {
    FullName => "fullName", "fullNameInput", Text, true;
    PhoneNumber => "phoneNumber", "phoneNumberInput", Tel, true;
    Email => "email", "emailInput", Email, true;
    Dob => "dob", "dobInput", Date, true;
    Address => "address", "addressInput", Text, true;
    City => "city", "cityInput", Text, true;
    State => "state", "stateInput", Text, true;
    Zip => "zip", "zipInput", Text, false;
    Occupation => "occupation", "occupationInput", Text, true;
    Income => "income", "incomeInput", Number, true;
    Rent => "rent", "rentInput", Number, false;
    Married => "married", "married", Radio, true;
    Pets => "pets", "pets", Radio, true;
    Car => "car", "car", Radio, true;
    KeysDate => "keysDate", "keysDateInput", Date, false;
    StayDate => "stayDate", "stayDateInput", Date, false;
    LeaseDuration => "leaseDuration", "leaseDurationSelect", Select, true;
    MoveInDate => "moveInDate", "moveInDateInput", Date, true;
    SecurityDeposit => "securityDeposit", "securityDepositInput", Number, false;
    RentPayment => "rentPayment", "rentPaymentSelect", Select, false;
    ApplicationFee => "applicationFee", "applicationFee", Radio, true;
    PaymentMethod => "paymentMethod", "paymentMethod", Radio, true;
    Signature => "signature", "signatureCanvas", Signature, false;
}

impl Field {
    /// Keys substituted into the email template. The signature travels as an
    /// inline attachment instead.
    pub const TEMPLATE: &'static [Field] = &[
        Field::FullName,
        Field::PhoneNumber,
        Field::Email,
        Field::Dob,
        Field::Address,
        Field::City,
        Field::State,
        Field::Zip,
        Field::Occupation,
        Field::Income,
        Field::Rent,
        Field::Married,
        Field::Pets,
        Field::Car,
        Field::KeysDate,
        Field::StayDate,
        Field::LeaseDuration,
        Field::MoveInDate,
        Field::SecurityDeposit,
        Field::RentPayment,
        Field::ApplicationFee,
        Field::PaymentMethod,
    ];

    /// Radio answers normalized to a leading capital before they reach the email.
    pub fn is_categorical(self) -> bool {
        matches!(
            self,
            Field::Married | Field::Pets | Field::Car | Field::ApplicationFee | Field::PaymentMethod
        )
    }

    pub fn kind(self) -> FieldKind {
        self.spec().kind
    }

    pub fn token(self) -> String {
        format!("{{{{{}}}}}", self.key())
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

//! Closed dispatch over every supported identifier scheme.

use serde::{Deserialize, Serialize};

use super::id::NationalId;

#[cfg(feature = "denmark")]
use crate::denmark::DanishPersonalId;
#[cfg(feature = "finland")]
use crate::finland::FinnishPersonalId;
#[cfg(feature = "norway")]
use crate::norway::{
    NorwegianBankAccountNumber, NorwegianCompanyId, NorwegianCustomerId, NorwegianPersonalId,
};
#[cfg(feature = "sweden")]
use crate::sweden::SwedishPersonalId;
#[cfg(feature = "uk")]
use crate::uk::{NationalInsuranceNumber, NhsNumber};

/// A supported identifier scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub enum Scheme {
    /// CPR-nummer.
    #[cfg(feature = "denmark")]
    DanishPersonalId,
    /// Henkilötunnus.
    #[cfg(feature = "finland")]
    FinnishPersonalId,
    /// Personnummer, samordningsnummer or organisationsnummer.
    #[cfg(feature = "sweden")]
    SwedishPersonalId,
    /// Fødselsnummer, D-, H- or FH-nummer.
    #[cfg(feature = "norway")]
    NorwegianPersonalId,
    /// Organisasjonsnummer.
    #[cfg(feature = "norway")]
    NorwegianCompanyId,
    /// Kontonummer.
    #[cfg(feature = "norway")]
    NorwegianBankAccountNumber,
    /// KID payment reference.
    #[cfg(feature = "norway")]
    NorwegianCustomerId,
    /// UK National Insurance number.
    #[cfg(feature = "uk")]
    NationalInsuranceNumber,
    /// NHS, H&C or CHI number.
    #[cfg(feature = "uk")]
    NhsNumber,
}

/// Result of [`Scheme::validate`], tagged with the scheme that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum AnyId {
    /// CPR-nummer.
    #[cfg(feature = "denmark")]
    DanishPersonalId(DanishPersonalId),
    /// Henkilötunnus.
    #[cfg(feature = "finland")]
    FinnishPersonalId(FinnishPersonalId),
    /// Personnummer, samordningsnummer or organisationsnummer.
    #[cfg(feature = "sweden")]
    SwedishPersonalId(SwedishPersonalId),
    /// Fødselsnummer, D-, H- or FH-nummer.
    #[cfg(feature = "norway")]
    NorwegianPersonalId(NorwegianPersonalId),
    /// Organisasjonsnummer.
    #[cfg(feature = "norway")]
    NorwegianCompanyId(NorwegianCompanyId),
    /// Kontonummer.
    #[cfg(feature = "norway")]
    NorwegianBankAccountNumber(NorwegianBankAccountNumber),
    /// KID payment reference.
    #[cfg(feature = "norway")]
    NorwegianCustomerId(NorwegianCustomerId),
    /// UK National Insurance number.
    #[cfg(feature = "uk")]
    NationalInsuranceNumber(NationalInsuranceNumber),
    /// NHS, H&C or CHI number.
    #[cfg(feature = "uk")]
    NhsNumber(NhsNumber),
}

impl Scheme {
    /// Every scheme compiled into this build.
    pub const ALL: &'static [Scheme] = &[
        #[cfg(feature = "denmark")]
        Scheme::DanishPersonalId,
        #[cfg(feature = "finland")]
        Scheme::FinnishPersonalId,
        #[cfg(feature = "sweden")]
        Scheme::SwedishPersonalId,
        #[cfg(feature = "norway")]
        Scheme::NorwegianPersonalId,
        #[cfg(feature = "norway")]
        Scheme::NorwegianCompanyId,
        #[cfg(feature = "norway")]
        Scheme::NorwegianBankAccountNumber,
        #[cfg(feature = "norway")]
        Scheme::NorwegianCustomerId,
        #[cfg(feature = "uk")]
        Scheme::NationalInsuranceNumber,
        #[cfg(feature = "uk")]
        Scheme::NhsNumber,
    ];

    /// Validate `input` under this scheme.
    pub fn validate(self, input: &str) -> AnyId {
        match self {
            #[cfg(feature = "denmark")]
            Scheme::DanishPersonalId => AnyId::DanishPersonalId(DanishPersonalId::validate(input)),
            #[cfg(feature = "finland")]
            Scheme::FinnishPersonalId => {
                AnyId::FinnishPersonalId(FinnishPersonalId::validate(input))
            }
            #[cfg(feature = "sweden")]
            Scheme::SwedishPersonalId => {
                AnyId::SwedishPersonalId(SwedishPersonalId::validate(input))
            }
            #[cfg(feature = "norway")]
            Scheme::NorwegianPersonalId => {
                AnyId::NorwegianPersonalId(NorwegianPersonalId::validate(input))
            }
            #[cfg(feature = "norway")]
            Scheme::NorwegianCompanyId => {
                AnyId::NorwegianCompanyId(NorwegianCompanyId::validate(input))
            }
            #[cfg(feature = "norway")]
            Scheme::NorwegianBankAccountNumber => {
                AnyId::NorwegianBankAccountNumber(NorwegianBankAccountNumber::validate(input))
            }
            #[cfg(feature = "norway")]
            Scheme::NorwegianCustomerId => {
                AnyId::NorwegianCustomerId(NorwegianCustomerId::validate(input))
            }
            #[cfg(feature = "uk")]
            Scheme::NationalInsuranceNumber => {
                AnyId::NationalInsuranceNumber(NationalInsuranceNumber::validate(input))
            }
            #[cfg(feature = "uk")]
            Scheme::NhsNumber => AnyId::NhsNumber(NhsNumber::validate(input)),
        }
    }

    /// Short scheme name, as used in log events.
    pub fn name(self) -> &'static str {
        match self {
            #[cfg(feature = "denmark")]
            Scheme::DanishPersonalId => DanishPersonalId::SCHEME,
            #[cfg(feature = "finland")]
            Scheme::FinnishPersonalId => FinnishPersonalId::SCHEME,
            #[cfg(feature = "sweden")]
            Scheme::SwedishPersonalId => SwedishPersonalId::SCHEME,
            #[cfg(feature = "norway")]
            Scheme::NorwegianPersonalId => NorwegianPersonalId::SCHEME,
            #[cfg(feature = "norway")]
            Scheme::NorwegianCompanyId => NorwegianCompanyId::SCHEME,
            #[cfg(feature = "norway")]
            Scheme::NorwegianBankAccountNumber => NorwegianBankAccountNumber::SCHEME,
            #[cfg(feature = "norway")]
            Scheme::NorwegianCustomerId => NorwegianCustomerId::SCHEME,
            #[cfg(feature = "uk")]
            Scheme::NationalInsuranceNumber => NationalInsuranceNumber::SCHEME,
            #[cfg(feature = "uk")]
            Scheme::NhsNumber => NhsNumber::SCHEME,
        }
    }
}

impl AnyId {
    /// Whether the wrapped result is valid.
    pub fn is_valid(&self) -> bool {
        match self {
            #[cfg(feature = "denmark")]
            AnyId::DanishPersonalId(id) => id.is_valid(),
            #[cfg(feature = "finland")]
            AnyId::FinnishPersonalId(id) => id.is_valid(),
            #[cfg(feature = "sweden")]
            AnyId::SwedishPersonalId(id) => id.is_valid(),
            #[cfg(feature = "norway")]
            AnyId::NorwegianPersonalId(id) => id.is_valid(),
            #[cfg(feature = "norway")]
            AnyId::NorwegianCompanyId(id) => id.is_valid(),
            #[cfg(feature = "norway")]
            AnyId::NorwegianBankAccountNumber(id) => id.is_valid(),
            #[cfg(feature = "norway")]
            AnyId::NorwegianCustomerId(id) => id.is_valid(),
            #[cfg(feature = "uk")]
            AnyId::NationalInsuranceNumber(id) => id.is_valid(),
            #[cfg(feature = "uk")]
            AnyId::NhsNumber(id) => id.is_valid(),
        }
    }

    /// The scheme that produced this result.
    pub fn scheme(&self) -> Scheme {
        match self {
            #[cfg(feature = "denmark")]
            AnyId::DanishPersonalId(_) => Scheme::DanishPersonalId,
            #[cfg(feature = "finland")]
            AnyId::FinnishPersonalId(_) => Scheme::FinnishPersonalId,
            #[cfg(feature = "sweden")]
            AnyId::SwedishPersonalId(_) => Scheme::SwedishPersonalId,
            #[cfg(feature = "norway")]
            AnyId::NorwegianPersonalId(_) => Scheme::NorwegianPersonalId,
            #[cfg(feature = "norway")]
            AnyId::NorwegianCompanyId(_) => Scheme::NorwegianCompanyId,
            #[cfg(feature = "norway")]
            AnyId::NorwegianBankAccountNumber(_) => Scheme::NorwegianBankAccountNumber,
            #[cfg(feature = "norway")]
            AnyId::NorwegianCustomerId(_) => Scheme::NorwegianCustomerId,
            #[cfg(feature = "uk")]
            AnyId::NationalInsuranceNumber(_) => Scheme::NationalInsuranceNumber,
            #[cfg(feature = "uk")]
            AnyId::NhsNumber(_) => Scheme::NhsNumber,
        }
    }
}

/// Schemes under which `input` is valid.
pub fn matching_schemes(input: &str) -> Vec<Scheme> {
    Scheme::ALL
        .iter()
        .copied()
        .filter(|scheme| scheme.validate(input).is_valid())
        .collect()
}

//! Color converter: path resolution plus the compiled program.
//!
//! A [`ColorConverter`] owns a source and a target [`Color`]. At
//! construction it works out how to get from one to the other, compiles the
//! required stages into a single fused program and keeps it, together with
//! the register it runs in, until it is disposed.
//!
//! # Resolution
//!
//! Each side is classified as plain, as a profile's device data, or as a
//! profile's PCS. A PCS-side color behaves as a plain color whose white is
//! the profile's PCS white.
//!
//! | source | target | stages |
//! |--------|--------|--------|
//! | plain | plain | 1: registry path |
//! | data(p) | plain, already p's PCS type and white | 1: profile |
//! | data(p) | plain | 2: profile, path from p's PCS |
//! | plain | data(q) | mirror of the above |
//! | data(p) | data(q), same PCS type and white | 2: profile, profile |
//! | data(p) | data(q) | 3: profile, path between the PCSes, profile |
//!
//! Registry lookups are exact; a missing hop is [`ConvertError::NotFound`].
//!
//! # Example
//!
//! ```rust
//! use huepath_convert::ColorConverter;
//! use huepath_core::{Color, ColorType, Colorspace, RgbSpace, Whitepoint};
//! use std::sync::Arc;
//!
//! let source = Color::rgb(1.0, 1.0, 1.0, Arc::new(RgbSpace::srgb()));
//! let target = Color::zeroed(ColorType::Lab, Colorspace::Cie(Whitepoint::D50))?;
//!
//! let mut converter = ColorConverter::new(source, target)?;
//! let lab = converter.convert()?;
//! assert!((lab.values()[0] - 100.0).abs() < 1e-6);
//! # Ok::<(), huepath_convert::ConvertError>(())
//! ```

use crate::compiler::{Program, compile_chain, profile_stage};
use crate::registry::{AdaptationRegistry, ConversionPathRegistry, adaptations, paths, read_lock};
use crate::{ConvertError, ConvertResult};
use huepath_core::{
    Color, ColorType, Colorspace, DeviceProfile, MAX_CHANNELS, ProfileClass,
};
use huepath_math::ChromaticAdaptationMethod;
use std::sync::Arc;
use tracing::{debug, trace};

/// Converter settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConverterOptions {
    /// Name of the registered chromatic adaptation method.
    pub adaptation: String,
}

impl Default for ConverterOptions {
    fn default() -> Self {
        Self {
            adaptation: "Bradford".to_string(),
        }
    }
}

impl ConverterOptions {
    /// Options using the named adaptation method.
    pub fn with_adaptation(name: impl Into<String>) -> Self {
        Self {
            adaptation: name.into(),
        }
    }
}

/// Role of one side of a conversion.
#[derive(Debug)]
enum Role<'a> {
    Plain,
    Data(&'a Arc<dyn DeviceProfile>),
    Pcs(&'a Arc<dyn DeviceProfile>),
}

fn classify(color: &Color) -> ConvertResult<Role<'_>> {
    let Some(profile) = color.profile() else {
        return Ok(Role::Plain);
    };
    if profile.class() == ProfileClass::DeviceLink {
        return Err(ConvertError::Argument(format!(
            "device link profile '{}' cannot anchor a color",
            profile.description()
        )));
    }
    // Abstract profiles share one type on both sides: the data role wins.
    if color.kind() == profile.data_colorspace() {
        Ok(Role::Data(profile))
    } else if color.kind() == profile.pcs() {
        Ok(Role::Pcs(profile))
    } else {
        Err(ConvertError::Configuration(format!(
            "{} is neither data nor PCS of profile '{}'",
            color.kind(),
            profile.description()
        )))
    }
}

/// A plain-chain endpoint: a type and the colorspace its steps bind to.
#[derive(Debug, Clone)]
struct Endpoint {
    kind: ColorType,
    space: Colorspace,
}

impl Endpoint {
    fn of(color: &Color, role: &Role<'_>) -> Self {
        let space = match role {
            Role::Pcs(profile) => Colorspace::Cie(profile.pcs_white()),
            _ => color.space().clone(),
        };
        Self {
            kind: color.kind(),
            space,
        }
    }

    /// The connection space of `profile`.
    fn pcs(profile: &Arc<dyn DeviceProfile>) -> ConvertResult<Self> {
        let kind = profile.pcs();
        if !kind.is_pcs_type() {
            return Err(ConvertError::Configuration(format!(
                "profile '{}' declares {} as its PCS",
                profile.description(),
                kind
            )));
        }
        Ok(Self {
            kind,
            space: Colorspace::Cie(profile.pcs_white()),
        })
    }

    /// Can `profile` read or write these values without a plain chain?
    fn is_pcs_of(&self, profile: &Arc<dyn DeviceProfile>) -> bool {
        self.kind == profile.pcs() && self.space.reference_white() == profile.pcs_white()
    }
}

/// Accumulates stages into one program.
struct Builder<'a> {
    paths: &'a ConversionPathRegistry,
    method: &'a ChromaticAdaptationMethod,
    program: Program,
    stages: usize,
}

impl Builder<'_> {
    fn chain(&mut self, from: &Endpoint, to: &Endpoint) -> ConvertResult<()> {
        let path = self
            .paths
            .get(from.kind, to.kind)
            .ok_or(ConvertError::NotFound {
                from: from.kind,
                to: to.kind,
            })?;
        trace!("stage {}: {}", self.stages + 1, path);
        self.program
            .extend(compile_chain(path.steps(), &from.space, &to.space, self.method)?);
        self.stages += 1;
        Ok(())
    }

    fn profile(&mut self, profile: &Arc<dyn DeviceProfile>, to_pcs: bool) {
        trace!(
            "stage {}: profile '{}' {}",
            self.stages + 1,
            profile.description(),
            if to_pcs { "to PCS" } else { "from PCS" }
        );
        self.program.push(profile_stage(profile, to_pcs));
        self.stages += 1;
    }
}

/// Resolves the stages between two colors and compiles them.
fn resolve(
    source: &Color,
    target: &Color,
    paths: &ConversionPathRegistry,
    method: &ChromaticAdaptationMethod,
) -> ConvertResult<ConversionData> {
    let src_role = classify(source)?;
    let dst_role = classify(target)?;
    let mut b = Builder {
        paths,
        method,
        program: Program::default(),
        stages: 0,
    };

    match (&src_role, &dst_role) {
        (Role::Data(p), Role::Data(q)) => {
            let (pcs_p, pcs_q) = (Endpoint::pcs(p)?, Endpoint::pcs(q)?);
            b.profile(p, true);
            if !pcs_p.is_pcs_of(q) {
                b.chain(&pcs_p, &pcs_q)?;
            }
            b.profile(q, false);
        }
        (Role::Data(p), _) => {
            let other = Endpoint::of(target, &dst_role);
            let pcs = Endpoint::pcs(p)?;
            b.profile(p, true);
            if !other.is_pcs_of(p) {
                b.chain(&pcs, &other)?;
            }
        }
        (_, Role::Data(q)) => {
            let other = Endpoint::of(source, &src_role);
            let pcs = Endpoint::pcs(q)?;
            if !other.is_pcs_of(q) {
                b.chain(&other, &pcs)?;
            }
            b.profile(q, false);
        }
        _ => {
            b.chain(
                &Endpoint::of(source, &src_role),
                &Endpoint::of(target, &dst_role),
            )?;
        }
    }

    debug!(
        "{} ({}) -> {} ({}): {} stage(s), {} kernel(s)",
        source.kind(),
        source.space(),
        target.kind(),
        target.space(),
        b.stages,
        b.program.len()
    );

    Ok(ConversionData {
        program: b.program,
        stages: b.stages,
        register: [0.0; MAX_CHANNELS],
        scratch: [0.0; MAX_CHANNELS],
    })
}

/// Per-converter compiled state: the fused program and its buffers.
#[derive(Debug)]
struct ConversionData {
    program: Program,
    stages: usize,
    register: [f64; MAX_CHANNELS],
    scratch: [f64; MAX_CHANNELS],
}

impl ConversionData {
    fn run(&mut self, input: &[f64], output: &mut [f64]) {
        self.register = [0.0; MAX_CHANNELS];
        self.register[..input.len()].copy_from_slice(input);
        self.program.run(&mut self.register, &mut self.scratch);
        output.copy_from_slice(&self.register[..output.len()]);
    }
}

/// Converts a source color into a target color.
///
/// The source and target colors are owned. Update the source through
/// [`set_source`](Self::set_source) or
/// [`source_values_mut`](Self::source_values_mut), then call
/// [`convert`](Self::convert); the target's type and colorspace never change.
///
/// Converting allocates nothing.
#[derive(Debug)]
pub struct ColorConverter {
    source: Color,
    target: Color,
    data: Option<ConversionData>,
}

impl ColorConverter {
    /// Builds a converter against the global registries with default
    /// options.
    ///
    /// # Errors
    ///
    /// - [`ConvertError::NotFound`] when a required path is not registered
    /// - [`ConvertError::AdaptationNotFound`] when Bradford was removed
    /// - [`ConvertError::Argument`] for colors anchored to device links
    pub fn new(source: Color, target: Color) -> ConvertResult<Self> {
        Self::with_options(source, target, &ConverterOptions::default())
    }

    /// Builds a converter against the global registries.
    pub fn with_options(
        source: Color,
        target: Color,
        options: &ConverterOptions,
    ) -> ConvertResult<Self> {
        let paths = read_lock(paths());
        let adaptations = read_lock(adaptations());
        Self::with_registries(source, target, &paths, &adaptations, options)
    }

    /// Builds a converter against explicit registries.
    pub fn with_registries(
        source: Color,
        target: Color,
        paths: &ConversionPathRegistry,
        adaptations: &AdaptationRegistry,
        options: &ConverterOptions,
    ) -> ConvertResult<Self> {
        let method = adaptations
            .get(&options.adaptation)
            .ok_or_else(|| ConvertError::AdaptationNotFound(options.adaptation.clone()))?;
        let data = resolve(&source, &target, paths, method)?;
        Ok(Self {
            source,
            target,
            data: Some(data),
        })
    }

    /// Converts the current source values into the target and returns it.
    pub fn convert(&mut self) -> ConvertResult<&Color> {
        let data = self.data.as_mut().ok_or(ConvertError::Disposed)?;
        data.run(self.source.values(), self.target.values_mut());
        Ok(&self.target)
    }

    /// Runs the compiled program on caller buffers.
    ///
    /// `input` must hold exactly the source type's channels and `output`
    /// the target type's.
    pub fn apply(&mut self, input: &[f64], output: &mut [f64]) -> ConvertResult<()> {
        let (n_in, n_out) = (self.source.kind().channels(), self.target.kind().channels());
        if input.len() != n_in || output.len() != n_out {
            return Err(ConvertError::Argument(format!(
                "expected {} input and {} output channel(s), got {} and {}",
                n_in,
                n_out,
                input.len(),
                output.len()
            )));
        }
        let data = self.data.as_mut().ok_or(ConvertError::Disposed)?;
        data.run(input, output);
        Ok(())
    }

    /// Source color.
    pub fn source(&self) -> &Color {
        &self.source
    }

    /// Source channel values, writable.
    pub fn source_values_mut(&mut self) -> &mut [f64] {
        self.source.values_mut()
    }

    /// Replaces the source channel values.
    pub fn set_source(&mut self, values: &[f64]) -> ConvertResult<()> {
        Ok(self.source.set_values(values)?)
    }

    /// Target color, as of the last conversion.
    pub fn target(&self) -> &Color {
        &self.target
    }

    /// Number of resolved stages. Zero once disposed.
    pub fn stage_count(&self) -> usize {
        self.data.as_ref().map_or(0, |d| d.stages)
    }

    /// Number of kernels left after fusion. Zero once disposed.
    pub fn kernel_count(&self) -> usize {
        self.data.as_ref().map_or(0, |d| d.program.len())
    }

    /// True once [`dispose`](Self::dispose) has run.
    pub fn is_disposed(&self) -> bool {
        self.data.is_none()
    }

    /// Releases the compiled program and its buffers. Idempotent.
    pub fn dispose(&mut self) {
        if self.data.take().is_some() {
            trace!("converter {} -> {} disposed", self.source.kind(), self.target.kind());
        }
    }
}

impl Drop for ColorConverter {
    fn drop(&mut self) {
        self.dispose();
    }
}

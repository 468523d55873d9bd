/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
//! Pipelines, chaining operations on an image
//!
use std::time::Instant;

use pixmorph_core::log::trace;

use crate::errors::ImageErrors;
use crate::image::Image;
use crate::traits::{IntoImage, OperationsTrait};

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
enum PipelineState {
    /// Initial state, the struct has been defined
    Initialized,
    /// The pipeline is ready to decode its input
    Decode,
    /// The pipeline is ready to carry out image processing routines
    Operations,
    /// The pipeline is done.
    Finished
}

impl PipelineState {
    const fn next(self) -> Option<Self> {
        match self {
            PipelineState::Initialized => Some(PipelineState::Decode),
            PipelineState::Decode => Some(PipelineState::Operations),
            PipelineState::Operations => Some(PipelineState::Finished),
            PipelineState::Finished => None
        }
    }
}

/// Pipeline, ordered image processing
///
/// A pipeline takes a single input, anything that implements
/// [IntoImage](crate::traits::IntoImage), decodes it and runs every queued
/// operation on it in the order the operations were chained.
///
/// # Example
/// ```
/// use pixmorph_image::codecs::ppm::PPMDecoder;
/// use pixmorph_image::pipelines::Pipeline;
///
/// let mut pipeline = Pipeline::new();
/// pipeline.chain_decoder(PPMDecoder::new(b"P3 1 1 255 1 2 3"));
/// pipeline.advance_to_end().unwrap();
///
/// assert_eq!(pipeline.image().unwrap().dimensions(), (1, 1));
/// ```
pub struct Pipeline<'a, T: IntoImage> {
    state:      Option<PipelineState>,
    decode:     Option<T>,
    image:      Option<Image>,
    operations: Vec<Box<dyn OperationsTrait + 'a>>
}

impl<'a, T> Pipeline<'a, T>
where
    T: IntoImage
{
    /// Create a new empty pipeline
    #[allow(clippy::new_without_default)]
    pub fn new() -> Pipeline<'a, T> {
        Pipeline {
            state:      Some(PipelineState::Initialized),
            decode:     None,
            image:      None,
            operations: vec![]
        }
    }

    /// Set the input of this pipeline
    ///
    /// There can only be one input, the last one chained
    /// is the one that will be decoded.
    pub fn chain_decoder(&mut self, decoder: T) -> &mut Pipeline<'a, T> {
        self.decode = Some(decoder);
        self
    }

    /// Add a new operation to the pipeline.
    ///
    /// Operations run in the order they were added, they may borrow
    /// data that outlives the pipeline
    pub fn chain_operations(
        &mut self, operation: Box<dyn OperationsTrait + 'a>
    ) -> &mut Pipeline<'a, T> {
        self.operations.push(operation);
        self
    }

    /// Return the image held by this pipeline, if it was decoded
    pub fn image(&self) -> Option<&Image> {
        self.image.as_ref()
    }

    /// Consume the pipeline and return its image
    pub fn into_image(self) -> Option<Image> {
        self.image
    }

    /// Advance the pipeline one state forward
    ///
    /// The pipeline advance is as follows
    ///
    /// 1. Decode
    /// 2. One or more operations [ all ran at once]
    /// 3. Finish
    ///
    /// # Errors
    /// - Decoding the input fails
    /// - There is no input when operations should run
    /// - An operation fails, later operations are not run
    pub fn advance(&mut self) -> Result<(), ImageErrors> {
        let Some(state) = self.state else {
            return Ok(());
        };

        match state {
            PipelineState::Decode => {
                if let Some(decoder) = self.decode.take() {
                    trace!("Current state: {:?}", state);

                    let start = Instant::now();

                    self.image = Some(decoder.into_image()?);

                    trace!("Finished decoding in {} ms", start.elapsed().as_millis());
                }
                self.state = state.next();
            }
            PipelineState::Operations => {
                let image = self
                    .image
                    .as_mut()
                    .ok_or(ImageErrors::NoImageForOperations)?;

                if !self.operations.is_empty() {
                    trace!("Current state: {:?}", state);
                }

                for operation in &self.operations {
                    let operation_name = operation.name();

                    let start = Instant::now();

                    operation.execute(image)?;

                    trace!(
                        "Finished running `{operation_name}` in {} ms",
                        start.elapsed().as_millis()
                    );
                }
                self.state = state.next();
            }
            PipelineState::Finished => {
                trace!("Finished operations for this pipeline");

                self.state = state.next();
            }
            PipelineState::Initialized => {
                self.state = state.next();
            }
        }
        Ok(())
    }

    /// Advance the pipeline until it finishes
    ///
    /// # Errors
    /// See [`advance`](Self::advance)
    pub fn advance_to_end(&mut self) -> Result<(), ImageErrors> {
        while self.state.is_some() {
            self.advance()?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use pixmorph_core::color::Color;

    use crate::errors::ImageErrors;
    use crate::image::Image;
    use crate::pipelines::Pipeline;
    use crate::traits::OperationsTrait;

    struct Record {
        tag: u8,
        log: Rc<RefCell<Vec<u8>>>
    }

    impl OperationsTrait for Record {
        fn name(&self) -> &'static str {
            "record"
        }

        fn execute_impl(&self, image: &mut Image) -> Result<(), ImageErrors> {
            self.log.borrow_mut().push(self.tag);
            image.pixels_mut()[0] = Color::gray(self.tag);
            Ok(())
        }
    }

    struct Fail;

    impl OperationsTrait for Fail {
        fn name(&self) -> &'static str {
            "fail"
        }

        fn execute_impl(&self, _: &mut Image) -> Result<(), ImageErrors> {
            Err(ImageErrors::invalid_argument("always fails"))
        }
    }

    #[test]
    fn operations_run_in_chain_order() {
        let log = Rc::new(RefCell::new(vec![]));

        let mut pipeline = Pipeline::new();
        pipeline
            .chain_decoder(Image::fill(Color::BLACK, 2, 2).unwrap())
            .chain_operations(Box::new(Record {
                tag: 2,
                log: log.clone()
            }))
            .chain_operations(Box::new(Record {
                tag: 1,
                log: log.clone()
            }));
        pipeline.advance_to_end().unwrap();

        assert_eq!(*log.borrow(), [2, 1]);
        assert_eq!(pipeline.into_image().unwrap()[(0, 0)], Color::gray(1));
    }

    #[test]
    fn no_input_is_an_error() {
        let mut pipeline = Pipeline::<Image>::new();

        assert!(matches!(
            pipeline.advance_to_end(),
            Err(ImageErrors::NoImageForOperations)
        ));
    }

    #[test]
    fn failing_operation_stops_the_pipeline() {
        let log = Rc::new(RefCell::new(vec![]));

        let mut pipeline = Pipeline::new();
        pipeline
            .chain_decoder(Image::fill(Color::BLACK, 1, 1).unwrap())
            .chain_operations(Box::new(Fail))
            .chain_operations(Box::new(Record {
                tag: 9,
                log: log.clone()
            }));

        assert!(pipeline.advance_to_end().is_err());
        assert!(log.borrow().is_empty());
    }
}

use diffsol::{
    ConstantOp, LinearOp, NonLinearOp, NonLinearOpJacobian, OdeEquations, OdeEquationsRef, Op,
};

use crate::data::Protocol;
use crate::simulator::flux::FluxKernel;

type T = f64;
type V = nalgebra::DVector<f64>;
type M = nalgebra::DMatrix<f64>;

pub struct PkRhs<'a> {
    nstates: usize,
    kernel: &'a FluxKernel,
    protocol: &'a Protocol,
}

impl Op for PkRhs<'_> {
    type T = T;
    type V = V;
    type M = M;
    fn nstates(&self) -> usize {
        self.nstates
    }
    fn nout(&self) -> usize {
        self.nstates
    }
    fn nparams(&self) -> usize {
        0
    }
}

impl NonLinearOp for PkRhs<'_> {
    fn call_inplace(&self, x: &Self::V, t: Self::T, y: &mut Self::V) {
        self.kernel.eval(x, self.protocol.dose_rate(t), y);
    }
}

impl NonLinearOpJacobian for PkRhs<'_> {
    // The flux equations are linear in the state, so the Jacobian action
    // is the kernel itself with the dose forcing switched off.
    fn jac_mul_inplace(&self, _x: &Self::V, _t: Self::T, v: &Self::V, y: &mut Self::V) {
        self.kernel.eval(v, 0.0, y);
    }
}

pub struct PkMass {
    nstates: usize,
}

impl Op for PkMass {
    type T = T;
    type V = V;
    type M = M;
    fn nstates(&self) -> usize {
        self.nstates
    }
    fn nout(&self) -> usize {
        self.nstates
    }
    fn nparams(&self) -> usize {
        0
    }
}

impl LinearOp for PkMass {
    fn gemv_inplace(&self, _x: &Self::V, _t: Self::T, _beta: Self::T, _y: &mut Self::V) {}
}

pub struct PkInit {
    nstates: usize,
    init: V,
}

impl Op for PkInit {
    type T = T;
    type V = V;
    type M = M;
    fn nstates(&self) -> usize {
        self.nstates
    }
    fn nout(&self) -> usize {
        self.nstates
    }
    fn nparams(&self) -> usize {
        0
    }
}

impl ConstantOp for PkInit {
    fn call_inplace(&self, _t: Self::T, y: &mut Self::V) {
        y.copy_from(&self.init);
    }
}

pub struct PkRoot {
    nstates: usize,
}

impl Op for PkRoot {
    type T = T;
    type V = V;
    type M = M;
    fn nstates(&self) -> usize {
        self.nstates
    }
    fn nout(&self) -> usize {
        self.nstates
    }
    fn nparams(&self) -> usize {
        0
    }
}

impl NonLinearOp for PkRoot {
    fn call_inplace(&self, _x: &Self::V, _t: Self::T, _y: &mut Self::V) {}
}

pub struct PkOut {
    nstates: usize,
}

impl Op for PkOut {
    type T = T;
    type V = V;
    type M = M;
    fn nstates(&self) -> usize {
        self.nstates
    }
    fn nout(&self) -> usize {
        self.nstates
    }
    fn nparams(&self) -> usize {
        0
    }
}

impl NonLinearOp for PkOut {
    fn call_inplace(&self, _x: &Self::V, _t: Self::T, _y: &mut Self::V) {}
}

/// The ODE problem handed to diffsol: a pre-bound flux kernel, the
/// protocol it reads the dose forcing from, and the initial state.
pub struct PkProblem {
    kernel: FluxKernel,
    protocol: Protocol,
    nstates: usize,
    init: V,
}

impl PkProblem {
    pub fn new(kernel: FluxKernel, protocol: Protocol, init: V) -> Self {
        let nstates = kernel.nstates();
        Self {
            kernel,
            protocol,
            nstates,
            init,
        }
    }
}

impl Op for PkProblem {
    type T = T;
    type V = V;
    type M = M;
    fn nstates(&self) -> usize {
        self.nstates
    }
    fn nout(&self) -> usize {
        self.nstates
    }
    fn nparams(&self) -> usize {
        0
    }
}

impl<'b> OdeEquationsRef<'b> for PkProblem {
    type Rhs = PkRhs<'b>;
    type Mass = PkMass;
    type Init = PkInit;
    type Root = PkRoot;
    type Out = PkOut;
}

impl OdeEquations for PkProblem {
    fn rhs(&self) -> PkRhs<'_> {
        PkRhs {
            nstates: self.nstates,
            kernel: &self.kernel,
            protocol: &self.protocol,
        }
    }

    fn mass(&self) -> Option<PkMass> {
        None
    }

    fn init(&self) -> PkInit {
        PkInit {
            nstates: self.nstates,
            init: self.init.clone(),
        }
    }

    fn get_params(&self, _p: &mut V) {}

    fn root(&self) -> Option<PkRoot> {
        None
    }

    fn out(&self) -> Option<PkOut> {
        None
    }

    fn set_params(&mut self, _p: &V) {}
}

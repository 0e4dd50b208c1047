use crate::graph::{
    gain::GainNode,
    mix::Mix,
    modulate::Modulate,
    node::{GraphNode, Modulatable},
    sum::Sum,
    through::Through,
};

pub trait NodeExt: GraphNode + Sized {
    fn through<F: GraphNode>(self, filter: F) -> Through<Self, F> {
        Through::new(self, filter)
    }

    fn gain(self, level: f32) -> Through<Self, GainNode> {
        Through::new(self, GainNode::new(level))
    }

    fn modulate<M: GraphNode>(self, lfo: M, param: Self::Param, depth: f32) -> Modulate<Self, M>
    where
        Self: Modulatable,
    {
        Modulate::new(self, lfo, param, depth)
    }

    fn mix<M: GraphNode>(self, source: M, balance: f32) -> Mix<Self, M> {
        Mix::new(self, source, balance)
    }

    fn sum<M: GraphNode>(self, source: M) -> Sum<Self, M> {
        Sum::new(self, source)
    }
}

impl<T: GraphNode> NodeExt for T {}
